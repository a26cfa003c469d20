pub mod avatar_policy;

pub use avatar_policy::AvatarPolicy;
