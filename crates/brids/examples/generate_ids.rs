use brids::{license_plate, phone};

fn main() {
    tracing_subscriber::fmt().init();

    for selector in ["LLLNNNN", "LLLNLNN"] {
        if let Some(plate) = license_plate::generate(selector) {
            let formatted = license_plate::format(&plate).unwrap_or_default();
            println!("{selector} plate: {plate} -> {formatted}");
        }
    }

    let mobile = phone::generate_mobile();
    println!("mobile:   {} -> {}", mobile, phone::format(&mobile).unwrap_or_default());

    let landline = phone::generate_landline();
    println!(
        "landline: {} -> {}",
        landline,
        phone::format(&landline).unwrap_or_default()
    );
}
