pub use super::action_log::Entity as ActionLog;
pub use super::appeal::Entity as Appeal;
pub use super::loa_request::Entity as LoaRequest;
pub use super::staff_member::Entity as StaffMember;
pub use super::staff_member_role::Entity as StaffMemberRole;
pub use super::user::Entity as User;
pub use super::wallet_transaction::Entity as WalletTransaction;
