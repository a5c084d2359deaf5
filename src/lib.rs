pub mod init;
pub mod v1;

pub mod prelude {
    pub use crate::v1::aws::{
        dms::{endpoint::*, replication_instance::*, replication_task::*, settings::*, tags::*},
        *,
    };
    pub use crate::v1::command::{self, Command, CommandError};
    pub use crate::v1::config::*;
    pub use crate::v1::manager::*;
    pub use crate::v1::mapper::*;
    pub use crate::v1::params::*;
    pub use crate::v1::select::*;
}
