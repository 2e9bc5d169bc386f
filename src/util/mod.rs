mod new_random_boundary;
pub use self::new_random_boundary::*;
