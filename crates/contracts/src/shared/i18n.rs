//! Storefront translations.
//!
//! The UI text lives in one typed table instead of a string-keyed map: every
//! piece of copy is a [`TextKey`] variant and [`text`] is total over both
//! locales, so a missing translation is a compile error rather than a key
//! echoed back at runtime.

use serde::{Deserialize, Serialize};

/// Supported locales. English is the default; Indonesian is the market
/// locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    En,
    Id,
}

impl Locale {
    /// Returns the locale tag as stored in localStorage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }

    /// Parses a stored locale tag; anything unknown falls back to English.
    pub fn from_str(s: &str) -> Self {
        match s {
            "id" => Locale::Id,
            _ => Locale::En,
        }
    }

    /// The other locale, for the header toggle.
    pub fn toggled(&self) -> Self {
        match self {
            Locale::En => Locale::Id,
            Locale::Id => Locale::En,
        }
    }

    pub fn all() -> [Locale; 2] {
        [Locale::En, Locale::Id]
    }
}

/// Every piece of UI copy on the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    NavHome,
    NavCollections,
    NavProducts,
    NavAbout,
    NavFaq,
    NavConsultation,
    NavContact,
    HeroText,
    CollectionsTitle,
    CollectionsSubtitle,
    CollectionsView,
    ProductsTitle,
    ProductsSubtitle,
    ProductsAll,
    ProductsAddToCart,
    ProductsAdded,
    ProductsImageComingSoon,
    ProductsNoImage,
    ProductsPieces,
    AboutTitle,
    AboutSubtitle,
    FaqTitle,
    FaqSubtitle,
    FaqMaterialsQ,
    FaqMaterialsA,
    FaqProductionQ,
    FaqProductionA,
    FaqCustomQ,
    FaqCustomA,
    ConsultationTitle,
    ConsultationSubtitle,
    ConsultationFirstName,
    ConsultationLastName,
    ConsultationEmail,
    ConsultationPhone,
    ConsultationVision,
    ConsultationVisionPlaceholder,
    ConsultationSubmit,
    ConsultationSending,
    ConsultationThankYou,
    ConsultationReceived,
    ConsultationResponse,
    FooterTagline,
    FooterQuickLinks,
    FooterConnect,
    FooterRights,
    CartTitle,
    CartEmpty,
    CartEmptyDesc,
    CartTotal,
    CartComplete,
    CartLoading,
    CheckoutSecureTitle,
    CheckoutSingleDesc,
    CheckoutMultiDesc,
    CheckoutCancel,
    CheckoutContinue,
    CheckoutProgressNote,
    CheckoutFinish,
    CheckoutNextProduct,
    CheckoutClosedTitle,
    CheckoutClosedDesc,
    CheckoutTryAgain,
}

impl TextKey {
    /// Full key list, used by the totality test and nothing else.
    pub const ALL: &'static [TextKey] = &[
        TextKey::NavHome,
        TextKey::NavCollections,
        TextKey::NavProducts,
        TextKey::NavAbout,
        TextKey::NavFaq,
        TextKey::NavConsultation,
        TextKey::NavContact,
        TextKey::HeroText,
        TextKey::CollectionsTitle,
        TextKey::CollectionsSubtitle,
        TextKey::CollectionsView,
        TextKey::ProductsTitle,
        TextKey::ProductsSubtitle,
        TextKey::ProductsAll,
        TextKey::ProductsAddToCart,
        TextKey::ProductsAdded,
        TextKey::ProductsImageComingSoon,
        TextKey::ProductsNoImage,
        TextKey::ProductsPieces,
        TextKey::AboutTitle,
        TextKey::AboutSubtitle,
        TextKey::FaqTitle,
        TextKey::FaqSubtitle,
        TextKey::FaqMaterialsQ,
        TextKey::FaqMaterialsA,
        TextKey::FaqProductionQ,
        TextKey::FaqProductionA,
        TextKey::FaqCustomQ,
        TextKey::FaqCustomA,
        TextKey::ConsultationTitle,
        TextKey::ConsultationSubtitle,
        TextKey::ConsultationFirstName,
        TextKey::ConsultationLastName,
        TextKey::ConsultationEmail,
        TextKey::ConsultationPhone,
        TextKey::ConsultationVision,
        TextKey::ConsultationVisionPlaceholder,
        TextKey::ConsultationSubmit,
        TextKey::ConsultationSending,
        TextKey::ConsultationThankYou,
        TextKey::ConsultationReceived,
        TextKey::ConsultationResponse,
        TextKey::FooterTagline,
        TextKey::FooterQuickLinks,
        TextKey::FooterConnect,
        TextKey::FooterRights,
        TextKey::CartTitle,
        TextKey::CartEmpty,
        TextKey::CartEmptyDesc,
        TextKey::CartTotal,
        TextKey::CartComplete,
        TextKey::CartLoading,
        TextKey::CheckoutSecureTitle,
        TextKey::CheckoutSingleDesc,
        TextKey::CheckoutMultiDesc,
        TextKey::CheckoutCancel,
        TextKey::CheckoutContinue,
        TextKey::CheckoutProgressNote,
        TextKey::CheckoutFinish,
        TextKey::CheckoutNextProduct,
        TextKey::CheckoutClosedTitle,
        TextKey::CheckoutClosedDesc,
        TextKey::CheckoutTryAgain,
    ];
}

/// Looks up one piece of copy. Total over `(Locale, TextKey)`.
pub fn text(locale: Locale, key: TextKey) -> &'static str {
    let (en, id) = match key {
        TextKey::NavHome => ("Home", "Beranda"),
        TextKey::NavCollections => ("Collections", "Koleksi"),
        TextKey::NavProducts => ("Products", "Produk"),
        TextKey::NavAbout => ("About", "Tentang"),
        TextKey::NavFaq => ("FAQ", "FAQ"),
        TextKey::NavConsultation => ("Consultation", "Konsultasi"),
        TextKey::NavContact => ("Contact", "Kontak"),
        TextKey::HeroText => (
            "Our furniture is more than wood and craft; it's a space where memories grow, beauty endures, and your vision comes to life.",
            "Furnitur kami lebih dari sekadar kayu dan kerajinan; ini adalah ruang di mana kenangan tumbuh, keindahan bertahan, dan visi Anda menjadi nyata.",
        ),
        TextKey::CollectionsTitle => ("Curated Collections", "Koleksi Pilihan"),
        TextKey::CollectionsSubtitle => (
            "Discover our handpicked selections, each piece a testament to timeless design and exceptional craftsmanship",
            "Temukan pilihan terbaik kami, setiap karya adalah bukti desain abadi dan keahlian yang luar biasa",
        ),
        TextKey::CollectionsView => ("View Collection", "Lihat Koleksi"),
        TextKey::ProductsTitle => (
            "Your Next Spectacular Piece Awaits",
            "Karya Spektakuler Anda Menanti",
        ),
        TextKey::ProductsSubtitle => ("Indulge in timeless grace.", "Nikmati keanggunan abadi."),
        TextKey::ProductsAll => ("All", "Semua"),
        TextKey::ProductsAddToCart => ("Add to Cart", "Tambah ke Keranjang"),
        TextKey::ProductsAdded => ("Added!", "Ditambahkan!"),
        TextKey::ProductsImageComingSoon => ("Image coming soon", "Gambar segera hadir"),
        TextKey::ProductsNoImage => ("No image", "Tidak ada gambar"),
        TextKey::ProductsPieces => ("pieces", "karya"),
        TextKey::AboutTitle => ("The Art of Fine Living", "Seni Kehidupan yang Berkualitas"),
        TextKey::AboutSubtitle => (
            "We specialize in creating timeless furniture pieces that blend traditional craftsmanship with modern design sensibilities",
            "Kami mengkhususkan diri dalam menciptakan furnitur abadi yang memadukan keahlian tradisional dengan sensibilitas desain modern",
        ),
        TextKey::FaqTitle => ("Questions & Answers", "Tanya & Jawab"),
        TextKey::FaqSubtitle => (
            "Everything you need to know about our furniture and services",
            "Semua yang perlu Anda ketahui tentang furnitur dan layanan kami",
        ),
        TextKey::FaqMaterialsQ => ("What materials do you use?", "Material apa yang Anda gunakan?"),
        TextKey::FaqMaterialsA => (
            "We exclusively use premium Perhutani teak wood, known for its exceptional durability, natural beauty, and weather resistance.",
            "Kami secara eksklusif menggunakan kayu jati Perhutani premium, dikenal karena daya tahannya yang luar biasa, keindahan alami, dan ketahanan cuaca.",
        ),
        TextKey::FaqProductionQ => ("How long does production take?", "Berapa lama waktu produksi?"),
        TextKey::FaqProductionA => (
            "Production typically takes 15-30 days, depending on the complexity of the design and our current order queue.",
            "Produksi biasanya memakan waktu 15-30 hari, tergantung pada kompleksitas desain dan antrean pesanan kami saat ini.",
        ),
        TextKey::FaqCustomQ => ("Can I customize the furniture?", "Bisakah saya menyesuaikan furnitur?"),
        TextKey::FaqCustomA => (
            "Absolutely! You can specify your preferred model, dimensions, finishing color, and fabric choices.",
            "Tentu saja! Anda dapat menentukan model, dimensi, warna finishing, dan pilihan kain yang Anda inginkan.",
        ),
        TextKey::ConsultationTitle => ("Craft Your Dream Piece", "Ciptakan Karya Impian Anda"),
        TextKey::ConsultationSubtitle => (
            "Share your vision with us. Our artisans are ready to bring your ideas to life.",
            "Bagikan visi Anda dengan kami. Pengrajin kami siap mewujudkan ide Anda.",
        ),
        TextKey::ConsultationFirstName => ("First Name", "Nama Depan"),
        TextKey::ConsultationLastName => ("Last Name", "Nama Belakang"),
        TextKey::ConsultationEmail => ("Email", "Email"),
        TextKey::ConsultationPhone => ("Phone Number", "Nomor Telepon"),
        TextKey::ConsultationVision => ("Your Vision", "Visi Anda"),
        TextKey::ConsultationVisionPlaceholder => (
            "Tell us about your dream furniture piece...",
            "Ceritakan kepada kami tentang karya furnitur impian Anda...",
        ),
        TextKey::ConsultationSubmit => ("Submit Your Vision", "Kirim Visi Anda"),
        TextKey::ConsultationSending => ("Sending Your Vision...", "Mengirim Visi Anda..."),
        TextKey::ConsultationThankYou => ("Thank You!", "Terima Kasih!"),
        TextKey::ConsultationReceived => (
            "Your vision has been received. We'll craft something extraordinary.",
            "Visi Anda telah diterima. Kami akan menciptakan sesuatu yang luar biasa.",
        ),
        TextKey::ConsultationResponse => (
            "We typically respond within 24 hours",
            "Kami biasanya merespons dalam 24 jam",
        ),
        TextKey::FooterTagline => (
            "Handcrafted teak wood furniture from Jepara, Indonesia. Timeless elegance meets expert craftsmanship.",
            "Furnitur kayu jati buatan tangan dari Jepara, Indonesia. Keanggunan abadi bertemu keahlian ahli.",
        ),
        TextKey::FooterQuickLinks => ("Quick Links", "Tautan Cepat"),
        TextKey::FooterConnect => ("Connect With Us", "Hubungi Kami"),
        TextKey::FooterRights => ("All rights reserved.", "Semua hak dilindungi."),
        TextKey::CartTitle => ("Your Cart", "Keranjang Anda"),
        TextKey::CartEmpty => ("Your cart is empty", "Keranjang Anda kosong"),
        TextKey::CartEmptyDesc => (
            "Add some beautiful furniture to get started",
            "Tambahkan furnitur indah untuk memulai",
        ),
        TextKey::CartTotal => ("Total", "Total"),
        TextKey::CartComplete => ("Complete Your Order", "Selesaikan Pesanan Anda"),
        TextKey::CartLoading => ("Loading beautiful furniture...", "Memuat furnitur indah..."),
        TextKey::CheckoutSecureTitle => (
            "Secure checkout powered by Tokopedia",
            "Checkout aman didukung oleh Tokopedia",
        ),
        TextKey::CheckoutSingleDesc => (
            "You'll be redirected to complete your purchase",
            "Anda akan dialihkan untuk menyelesaikan pembelian",
        ),
        TextKey::CheckoutMultiDesc => (
            "For secure checkout, your products will open one by one in Tokopedia.",
            "Untuk checkout yang aman, produk Anda akan dibuka satu per satu di Tokopedia.",
        ),
        TextKey::CheckoutCancel => ("Cancel", "Batal"),
        TextKey::CheckoutContinue => ("Continue", "Lanjutkan"),
        TextKey::CheckoutProgressNote => (
            "Your checkout is now in progress on Tokopedia. Please complete your purchase to confirm.",
            "Checkout Anda sedang berlangsung di Tokopedia. Silakan selesaikan pembelian untuk konfirmasi.",
        ),
        TextKey::CheckoutFinish => ("Finish", "Selesai"),
        TextKey::CheckoutNextProduct => ("Next Product", "Produk Berikutnya"),
        TextKey::CheckoutClosedTitle => ("Checkout Closed", "Checkout Ditutup"),
        TextKey::CheckoutClosedDesc => (
            "You closed the checkout early. Would you like to retry?",
            "Anda menutup checkout lebih awal. Ingin mencoba lagi?",
        ),
        TextKey::CheckoutTryAgain => ("Try Again", "Coba Lagi"),
    };
    match locale {
        Locale::En => en,
        Locale::Id => id,
    }
}

/// Localized display name for a catalog category.
///
/// Categories arrive as free text from the catalog file; only the known
/// ones have an Indonesian label, everything else passes through.
pub fn category_label(locale: Locale, category: &str) -> String {
    if locale == Locale::En {
        return category.to_string();
    }
    let id = match category {
        "Patio chairs" => "Kursi Teras",
        "TV console" => "Meja TV",
        "Sleeping cot" => "Tempat Tidur",
        "Sofa for guest" => "Sofa Tamu",
        "Sofa" => "Sofa",
        "Dining chairs" => "Kursi Makan",
        "Small table cupboard" => "Lemari Kecil",
        "Cafe chairs" => "Kursi Kafe",
        other => other,
    };
    id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_copy_in_both_locales() {
        for &key in TextKey::ALL {
            for locale in Locale::all() {
                assert!(
                    !text(locale, key).is_empty(),
                    "empty copy for {key:?} in {locale:?}"
                );
            }
        }
    }

    #[test]
    fn locale_tag_round_trips() {
        for locale in Locale::all() {
            assert_eq!(Locale::from_str(locale.as_str()), locale);
        }
        // Unknown tags fall back to English.
        assert_eq!(Locale::from_str("fr"), Locale::En);
        assert_eq!(Locale::from_str(""), Locale::En);
    }

    #[test]
    fn toggle_flips_between_the_two_locales() {
        assert_eq!(Locale::En.toggled(), Locale::Id);
        assert_eq!(Locale::Id.toggled(), Locale::En);
    }

    #[test]
    fn known_categories_localize_and_unknown_pass_through() {
        assert_eq!(category_label(Locale::Id, "Dining chairs"), "Kursi Makan");
        assert_eq!(category_label(Locale::En, "Dining chairs"), "Dining chairs");
        assert_eq!(category_label(Locale::Id, "Bar stools"), "Bar stools");
    }
}
