// Route exports
pub mod matches;

use actix_web::web;
use crate::services::ProfileStore;

pub fn configure_routes<S>(cfg: &mut web::ServiceConfig)
where
    S: ProfileStore + 'static,
{
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure::<S>),
    );
}
