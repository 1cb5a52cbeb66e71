pub mod db;
pub mod propertydb;
pub mod userdb;

use propertydb::PropertyExt;
use userdb::UserExt;

/// Everything the HTTP layer needs from storage, as one object-safe bound.
pub trait DatabaseExt: PropertyExt + UserExt + Send + Sync {}

impl<T> DatabaseExt for T where T: PropertyExt + UserExt + Send + Sync {}
