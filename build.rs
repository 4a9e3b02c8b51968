#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // Only embed the icon when it is actually shipped with the sources
    if !std::path::Path::new("res/rponto.ico").exists() {
        return;
    }

    let mut res = WindowsResource::new();
    res.set_icon("res/rponto.ico")
        .set("FileDescription", "rPonto CLI")
        .set("ProductName", "rPonto")
        .set("OriginalFilename", "rponto.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
