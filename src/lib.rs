pub(crate) mod error;
pub mod game;
pub(crate) mod server;
pub mod table;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        error::{Error, Kind, Result},
        game::*,
        server::{Server, ServerOptions},
        table::*,
    };
}
