use service::cuisine_index::CuisineIndex;
use service::details_service::DetailsService;
use service::restaurant_service::RestaurantService;
use service::review_ledger::ReviewLedger;
use service::storage::SharedStore;

/// Handler state: one service per concern, all sharing a store handle.
#[derive(Clone)]
pub struct ServerState {
    pub restaurants: RestaurantService,
    pub cuisines: CuisineIndex,
    pub reviews: ReviewLedger,
    pub details: DetailsService,
}

impl ServerState {
    pub fn new(store: SharedStore) -> Self {
        let cuisines = CuisineIndex::new(store.clone());
        Self {
            restaurants: RestaurantService::new(store.clone(), cuisines.clone()),
            cuisines,
            reviews: ReviewLedger::new(store.clone()),
            details: DetailsService::new(store),
        }
    }
}
