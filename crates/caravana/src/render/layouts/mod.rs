pub mod accolades;
pub mod attendance;
pub mod collaborations;
pub mod contact;
pub mod film;
pub mod gallery;
pub mod opening;
pub mod quote;
pub mod story;
pub mod venues;
pub mod welcome;
pub mod world_tour;
