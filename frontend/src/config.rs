use log::Level;

pub const WHATSAPP_NUMBER: &str = "5519992483385";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/sergiodanieltreinador/";

/// WhatsApp deep link that opens a chat with `message` pre-filled.
pub fn whatsapp_link(message: &str) -> String {
    format!("https://wa.me/{}?text={}", WHATSAPP_NUMBER, urlencoding::encode(message))
}

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    ""  // trunk serve hands out frontend/public directly
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    ""  // Production CDN prefix, empty while assets ship with the bundle
}

/// Absolute URL for a bundled asset path such as `/logo.svg`.
pub fn asset_url(path: &str) -> String {
    format!("{}{}", get_asset_base(), path)
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Scene mounts and pin transitions while developing
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_percent_encodes_the_message() {
        assert_eq!(
            whatsapp_link("Olá Sérgio, tenho interesse na sua consultoria"),
            "https://wa.me/5519992483385?text=Ol%C3%A1%20S%C3%A9rgio%2C%20tenho%20interesse%20na%20sua%20consultoria"
        );
    }

    #[test]
    fn asset_url_keeps_the_path() {
        assert!(asset_url("/videos/depoimento-01.mp4").ends_with("/videos/depoimento-01.mp4"));
    }

    #[test]
    fn whatsapp_link_escapes_currency_and_punctuation() {
        assert_eq!(
            whatsapp_link("de R$297!"),
            "https://wa.me/5519992483385?text=de%20R%24297%21"
        );
    }
}
