//! Доступ к разметке страницы списка товаров, которую рендерит сервер.

use super::error::HeadingError;
use super::state::{HeadingState, SelectionSource};
use contracts::shared::category_selection::CategorySelection;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

/// id заголовка, в который пишется выбранная категория
pub const HEADING_ID: &str = "main-category";
/// Селектор ссылок навигации по категориям
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const DATA_CATEGORY: &str = "data-category";
pub const DATA_TYPE: &str = "data-type";

pub fn document() -> Result<Document, HeadingError> {
    let window = web_sys::window().ok_or(HeadingError::NoWindow)?;
    window.document().ok_or(HeadingError::NoDocument)
}

/// Строка запроса текущей страницы (`?category=...&type=...`)
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn heading(document: &Document) -> Result<HtmlElement, HeadingError> {
    document
        .get_element_by_id(HEADING_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| HeadingError::MissingElement(HEADING_ID.to_string()))
}

pub fn nav_links(document: &Document) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(NAV_LINK_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Вешает обработчик клика на ссылку навигации.
///
/// Переход по ссылке не отменяется: заголовок обновляется, и браузер
/// уходит на страницу ссылки.
pub fn on_nav_link_click(link: &Element, state: HeadingState) -> Result<(), HeadingError> {
    let target = link.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let selection = CategorySelection::from_attributes(
            target.get_attribute(DATA_CATEGORY),
            target.get_attribute(DATA_TYPE),
        );
        state.apply(&selection, SelectionSource::Click);
    });

    link.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|e| HeadingError::Listener(format!("{:?}", e)))?;

    // Обработчик живёт столько же, сколько страница
    handler.forget();
    Ok(())
}
