mod export;
mod icon;

use crate::export::ExportError;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Generates the tray icon assets for each platform target.
fn run() -> Result<(), ExportError> {
    // 16x16 for the macOS menu bar
    let mac_icon = icon::render(16);
    export::write_png(&mac_icon, "tray-icon-mac.png")?;
    println!("Created tray-icon-mac.png (16x16)");

    // 32x32 for Linux system trays
    let linux_icon = icon::render(32);
    export::write_png(&linux_icon, "tray-icon-linux.png")?;
    println!("Created tray-icon-linux.png (32x32)");

    // Multi-resolution ICO for the Windows notification area
    let win_icons = [icon::render(16), icon::render(32)];
    export::write_ico(&win_icons, &[16, 32], "tray-icon-win.ico")?;
    println!("Created tray-icon-win.ico (16x16, 32x32)");

    Ok(())
}
