mod cancel_profile;
mod get_profile_form;
mod initialize_profile_form;
mod select_avatar;
mod submit_profile;
mod update_profile_field;

pub use cancel_profile::{CancelProfileError, CancelProfileUseCase};
pub use get_profile_form::GetProfileFormUseCase;
pub use initialize_profile_form::InitializeProfileFormUseCase;
pub use select_avatar::SelectAvatarUseCase;
pub use submit_profile::{SubmitProfileError, SubmitProfileUseCase};
pub use update_profile_field::{UpdateProfileFieldError, UpdateProfileFieldUseCase};
