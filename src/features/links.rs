//! Outbound links
//!
//! The card only ever leaves the app through these static URLs. Opening is
//! delegated to the platform's URL handler.

use std::process::Command;

/// Prefilled chat that the "forgive" button sends
pub const APOLOGY_MESSAGE_URL: &str = "https://wa.me/201000754450?text=%D9%84%D8%A7%20%D8%AD%D8%B1%D9%83%D8%A9%20%D8%AD%D9%84%D9%88%D8%A9%20%D8%B9%D8%AC%D8%A8%D8%AA%D9%86%D9%8A%20%F0%9F%98%82%E2%9D%A4%EF%B8%8F%0A%D8%AE%D9%84%D8%A7%D8%B5%20%D8%B3%D8%A7%D9%85%D8%AD%D8%AA%D9%83";

/// Social platforms shown in the link grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialKind {
    Instagram,
    Snapchat,
    Pinterest,
    WhatsApp,
}

/// One tile of the social grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: &'static str,
    /// Icon file name inside the assets directory
    pub icon_file: &'static str,
}

/// Grid order, two per row
pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        kind: SocialKind::Instagram,
        url: "https://www.instagram.com/7z.karam?igsh=MTcydTAzZXBrcDFmdQ==",
        icon_file: "instagram.png",
    },
    SocialLink {
        kind: SocialKind::Snapchat,
        url: "https://www.snapchat.com/add/zeyadsaif22?share_id=8cSefD9MVMo&locale=en-US",
        icon_file: "snapchat.png",
    },
    SocialLink {
        kind: SocialKind::Pinterest,
        url: "https://pin.it/4LynP6iiq",
        icon_file: "pinterest.png",
    },
    SocialLink {
        kind: SocialKind::WhatsApp,
        url: "https://api.whatsapp.com/send/?phone=201000754450&text=%D8%AE%D9%84%D8%A7%D8%B5+%D9%85%D8%A8%D9%82%D8%AA%D8%B4+%D8%B2%D8%B9%D9%84%D8%A7%D9%86%D8%A9+%D9%85%D9%86%D9%83+%2B+%D8%AD%D8%A8%D9%8A%D8%AA+%D8%A7%D9%84%D9%87%D8%AF%D9%8A%D8%A9+%D8%A7%D9%88%D9%8A&type=phone_number&app_absent=0",
        icon_file: "whatsapp.png",
    },
];

/// Look up the link for a platform
pub fn social_link(kind: SocialKind) -> &'static SocialLink {
    SOCIAL_LINKS
        .iter()
        .find(|link| link.kind == kind)
        .unwrap_or(&SOCIAL_LINKS[0])
}

fn is_web_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Hand a web URL to the system's default handler
///
/// Blocks until the launcher process returns; call it off the UI thread.
pub fn open_url(url: &str) -> anyhow::Result<()> {
    if !is_web_url(url) {
        anyhow::bail!("Refusing to open non-web URL: {}", url);
    }

    let status = launcher(url)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to launch URL handler: {}", e))?;

    if !status.success() {
        anyhow::bail!("URL handler exited with {}", status);
    }

    tracing::info!("Opened {}", url);
    Ok(())
}

#[cfg(target_os = "windows")]
fn launcher(url: &str) -> Command {
    // No shell in between: cmd.exe would split the query string at `&`
    let mut cmd = Command::new("rundll32");
    cmd.args(["url.dll,FileProtocolHandler", url]);
    cmd
}

#[cfg(target_os = "macos")]
fn launcher(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn launcher(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_web_urls() {
        assert!(open_url("file:///etc/passwd").is_err());
        assert!(open_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_all_links_are_web_urls() {
        assert!(is_web_url(APOLOGY_MESSAGE_URL));
        for link in SOCIAL_LINKS {
            assert!(is_web_url(link.url), "{:?}", link.kind);
            assert!(link.icon_file.ends_with(".png"));
        }
    }

    #[test]
    fn test_launcher_passes_url_whole() {
        for url in SOCIAL_LINKS.iter().map(|link| link.url).chain([APOLOGY_MESSAGE_URL]) {
            let cmd = launcher(url);
            let args: Vec<_> = cmd.get_args().collect();
            assert_eq!(args.last().copied(), Some(std::ffi::OsStr::new(url)));
            assert_ne!(cmd.get_program(), "cmd");
            assert_ne!(cmd.get_program(), "sh");
        }
    }

    #[test]
    fn test_lookup_by_kind() {
        assert_eq!(social_link(SocialKind::Pinterest).url, "https://pin.it/4LynP6iiq");
        assert_eq!(social_link(SocialKind::WhatsApp).icon_file, "whatsapp.png");
    }
}
