pub use super::brand::Entity as Brand;
pub use super::configuration::Entity as Configuration;
pub use super::parameter::Entity as Parameter;
pub use super::participation::Entity as Participation;
pub use super::review::Entity as Review;
pub use super::role::Entity as Role;
pub use super::trip::Entity as Trip;
pub use super::trip_vehicle::Entity as TripVehicle;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
pub use super::vehicle::Entity as Vehicle;
