//! Badge rendering example - picks one wisdom entry and prints the artifact

use wisdombadge::{BadgeRenderer, RenderOptions, WisdomStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = WisdomStore::default();
    let renderer = wisdombadge::new_renderer(RenderOptions::default())?;

    let text = store.pick();
    println!("wisdom: {}\n", text);

    let badge = renderer.render_badge(text)?;
    println!("content type: {}", badge.content_type);
    match std::str::from_utf8(&badge.data) {
        Ok(markup) => println!("{}", markup),
        Err(_) => println!("{} bytes of image data", badge.data.len()),
    }

    Ok(())
}
