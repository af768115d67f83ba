pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::{
            account::factory as account_factory, auth::factory as auth_factory, data_body,
            error_body, page_body, ship::factory as ship_factory, validation_body,
        },
        TestBuilder, TestError, TestSetup,
    };
}
