pub mod keygen;
pub mod url_validator;
