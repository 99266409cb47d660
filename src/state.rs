use std::sync::Arc;

use crate::cqrs::{
    AddToBagCommandHandler, AdvanceSlideCommandHandler, GetBagQueryHandler,
    GetProductQueryHandler, GetStorefrontQueryHandler, JumpToSlideCommandHandler,
    RetreatSlideCommandHandler,
};

#[derive(Clone)]
pub struct AppState {
    pub get_storefront_query_handler: Arc<GetStorefrontQueryHandler>,
    pub get_product_query_handler: Arc<GetProductQueryHandler>,
    pub get_bag_query_handler: Arc<GetBagQueryHandler>,
    pub advance_slide_command_handler: Arc<AdvanceSlideCommandHandler>,
    pub retreat_slide_command_handler: Arc<RetreatSlideCommandHandler>,
    pub jump_to_slide_command_handler: Arc<JumpToSlideCommandHandler>,
    pub add_to_bag_command_handler: Arc<AddToBagCommandHandler>,
}
