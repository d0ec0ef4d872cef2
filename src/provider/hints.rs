use scraper::{ElementRef, Html, Selector};

use super::ProviderError;

/// Extract hint terms, in document order, from the plist returned by the
/// search hints endpoint:
///
/// ```xml
/// <plist><dict><key>hints</key><array>
///   <dict><key>term</key><string>candy crush</string>...</dict>
/// </array></dict></plist>
/// ```
pub(crate) fn parse_hint_terms(body: &str) -> Result<Vec<String>, ProviderError> {
    let document = Html::parse_document(body);
    let plist_selector = selector("plist")?;
    let key_selector = selector("key")?;

    if document.select(&plist_selector).next().is_none() {
        return Err(ProviderError::Decode(
            "hints response is not a plist document".to_string(),
        ));
    }

    let Some(hints) = document
        .select(&key_selector)
        .filter(|key| element_text(key) == "hints")
        .find_map(|key| next_element(&key).filter(|value| is_named(value, "array")))
    else {
        return Ok(Vec::new());
    };

    let terms = hints
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|hint| is_named(hint, "dict"))
        .filter_map(|hint| hint_term(&hint, &key_selector))
        .collect();

    Ok(terms)
}

/// The `term` value of one hint dict. A self-closing value such as `<true/>`
/// parses as an open element, so keys may sit below the dict rather than
/// directly in it; keys belonging to a nested dict are skipped.
fn hint_term(hint: &ElementRef<'_>, key_selector: &Selector) -> Option<String> {
    hint.select(key_selector)
        .filter(|key| owning_dict(key).is_some_and(|dict| dict.id() == hint.id()))
        .find(|key| element_text(key) == "term")
        .and_then(|key| next_element(&key))
        .filter(|value| is_named(value, "string"))
        .map(|value| element_text(&value))
}

fn owning_dict<'a>(key: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    key.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| is_named(ancestor, "dict"))
}

fn next_element<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

fn is_named(element: &ElementRef<'_>, name: &str) -> bool {
    element.value().name() == name
}

fn selector(raw: &str) -> Result<Selector, ProviderError> {
    Selector::parse(raw).map_err(|err| ProviderError::Decode(err.to_string()))
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
