// --- File: crates/salonify_booking/src/chat.rs ---
//! Keyword-based replies for the site's chat widget.

const GREETING: &str = "Merhaba! Size nasıl yardımcı olabilirim?";
const BOOKING: &str = "Randevu almak için 'Randevu Al' butonunu kullanabilir veya +90 505 071 95 01 numaralı telefondan bize ulaşabilirsiniz.";
const PRICING: &str = "Hizmetlerimizin fiyatları hakkında bilgi almak için lütfen bizimle iletişime geçin. Her hizmet için farklı fiyatlandırmalarımız bulunmaktadır.";
const LOCATION: &str = "Salonumuz Adana'da bulunmaktadır. Detaylı adres bilgisi için lütfen iletişim sayfamızı ziyaret edin.";
const HOURS: &str = "Çalışma saatlerimiz: Pazartesi-Cumartesi 09:00-20:00 arasındadır. Pazar günleri kapalıyız.";
const FALLBACK: &str = "Sorunuz için teşekkürler. Size daha iyi yardımcı olabilmek için lütfen +90 505 071 95 01 numaralı telefondan bize ulaşın veya web sitemizden randevu alın.";

// First matching rule wins.
const RULES: &[(&[&str], &str)] = &[
    (&["merhaba", "selam"], GREETING),
    (&["randevu", "rezervasyon"], BOOKING),
    (&["fiyat", "ücret"], PRICING),
    (&["adres", "konum", "nerede"], LOCATION),
    (&["saat", "çalışma"], HOURS),
];

/// Pick the canned reply for a visitor message, matching keywords case-insensitively.
pub fn reply_to(message: &str) -> &'static str {
    let message = message.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK)
}
