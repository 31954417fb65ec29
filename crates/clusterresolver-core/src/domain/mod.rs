//! Domain model (kinds, request params, resources, errors).

pub mod errors;
pub mod kind;
pub mod params;
pub mod resource;

pub use self::errors::{ErrorKind, ResolverError};
pub use self::kind::{ResourceKind, UnknownKind};
pub use self::params::{PARAM_KIND, PARAM_NAME, Params, ResolutionRequest};
pub use self::resource::{
    ANNOTATION_CONTENT_TYPE, CONTENT_TYPE_JSON, ObjectMeta, ResolvedResource, StoredResource,
};
