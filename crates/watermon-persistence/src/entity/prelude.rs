pub use super::history::Entity as History;
pub use super::machine_log::Entity as MachineLog;
pub use super::machine_status::Entity as MachineStatus;
pub use super::users::Entity as Users;
