//! UI Components
//!
//! Leptos components making up the product list widget.

mod product_list;
mod category_filter;
mod item_card;
mod load_more_button;

pub use product_list::ProductList;
pub use category_filter::CategoryFilter;
pub use item_card::ItemCard;
pub use load_more_button::LoadMoreButton;
