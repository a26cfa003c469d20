mod cancel_profile;
mod get_profile_form;
mod profile_form_response;
mod reload_profile_form;
mod select_avatar;
mod submit_profile;
mod update_profile_field;

pub use cancel_profile::*;
pub use get_profile_form::*;
pub use profile_form_response::*;
pub use reload_profile_form::*;
pub use select_avatar::*;
pub use submit_profile::*;
pub use update_profile_field::*;
