mod apps;
mod params;
mod position;
mod suggest;

pub use apps::AppLookupService;
pub use position::PositionService;
pub use suggest::SuggestService;

use std::sync::Arc;

use crate::types::Dependencies;

#[derive(Clone)]
pub struct Services {
    pub suggest: SuggestService,
    pub position: PositionService,
    pub apps: AppLookupService,
}

impl Services {
    pub fn new(deps: Arc<Dependencies>) -> Self {
        Self {
            suggest: SuggestService::new(deps.clone()),
            position: PositionService::new(deps.clone()),
            apps: AppLookupService::new(deps),
        }
    }
}

#[cfg(test)]
mod fake;
