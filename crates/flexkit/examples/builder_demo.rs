use flexkit::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> flexkit::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let header_ref = NodeRef::new();

    let root = column()
        .tag("main")
        .padding((2, 3))
        .style([("background", "#1a1a2e"), ("color", "#eee")])
        .child(
            row()
                .tag("header")
                .justify(Justify::SpaceBetween)
                .node_ref(&header_ref)
                .child(text("Flexkit Builder API").tag("h1").size(2).weight("bold"))
                .child(text("v0.1").tag("span").weight(300)),
        )
        .child(
            form()
                .padding(true)
                .justify(Justify::FlexEnd)
                .on_submit(|event| event.prevent_default())
                .child(container().tag("input").attr("name", "email").attr("required", true))
                .child(container().tag("button").attr("type", "submit").child("Subscribe")),
        )
        .build();

    let doc = Document::new(root);

    let options = match std::env::var("FLEXKIT_HTML_OPTIONS") {
        Ok(path) => HtmlOptions::from_file(path)?,
        Err(_) => HtmlOptions::pretty(),
    };

    println!("{}", doc.to_html(&options)?);

    if let Some(header) = header_ref.get() {
        tracing::info!(tag = %header.tag, path = ?header.path, "header mounted");
    }

    let path = std::env::temp_dir().join("flexkit_demo.json");
    doc.write_to_file(&path)?;
    println!("\nWrote {}", path.display());

    Ok(())
}
