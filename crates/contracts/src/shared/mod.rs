pub mod category_selection;
