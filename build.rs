fn main() {
    // Windows executables get the avatar as their icon when one is provided
    #[cfg(windows)]
    {
        let icon = "assets/app.ico";
        println!("cargo:rerun-if-changed={}", icon);
        if std::path::Path::new(icon).exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon(icon);
            res.set("ProductName", "Apology Card");
            res.set("FileDescription", "Apology Card");
            res.compile().unwrap();
        } else {
            println!("cargo:warning={} not found, skipping icon embedding", icon);
        }
    }
}
