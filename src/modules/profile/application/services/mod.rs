mod profile_form_service;

pub use profile_form_service::ProfileFormService;
