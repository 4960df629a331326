use crate::constants::LOGOS_TRACK_ID;
use web_sys as web;

/// Append one deep copy of every logo so the CSS marquee loops seamlessly.
pub fn init(document: &web::Document) {
    let Some(track) = document.get_element_by_id(LOGOS_TRACK_ID) else {
        return;
    };
    let children = track.children();
    let originals: Vec<web::Element> = (0..children.length())
        .filter_map(|i| children.item(i))
        .collect();
    for logo in &originals {
        if let Ok(copy) = logo.clone_node_with_deep(true) {
            _ = track.append_child(&copy);
        }
    }
    log::info!("[ticker] duplicated {} logos", originals.len());
}
