pub mod use_donors;
