pub mod diagnostic;
pub mod theme;

pub use theme::Theme;

pub fn heading(message: impl AsRef<str>) {
    println!("{}", Theme::primary(message.as_ref()));
}

pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("  {:<14} {}", Theme::bold(label), value);
}

pub fn list(label: &str, items: &[String]) {
    if items.is_empty() {
        field(label, Theme::muted("(none)"));
        return;
    }
    field(label, &items[0]);
    for item in &items[1..] {
        println!("  {:<14} {}", "", item);
    }
}

pub fn flag(label: &str, present: bool) {
    let value = if present {
        Theme::success("found")
    } else {
        Theme::warning("missing")
    };
    field(label, value);
}
