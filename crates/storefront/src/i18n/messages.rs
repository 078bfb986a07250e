//! The static message catalog.
//!
//! Every user-facing string key is a variant of [`MessageKey`], so a typo
//! in a literal key is a compile error rather than a blank spot in the UI.
//! The dotted string forms exist only for the dynamic entry point
//! ([`MessageKey::parse`]) and for diagnostics.

use dark_cat_core::Language;

/// The finite set of translation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // Navigation
    NavHome,
    NavHoodies,
    NavMen,
    NavWomen,
    NavYouth,
    NavShop,
    NavCustomize,
    NavAbout,
    NavCart,
    // Hero
    HeroTitle,
    HeroSubtitle,
    HeroCta,
    // Features
    FeaturesPremium,
    FeaturesExclusive,
    FeaturesShipping,
    // Categories
    CategoriesTitle,
    CategoriesMen,
    CategoriesWomen,
    CategoriesYouth,
    CategoriesExplore,
    // Products
    ProductsTitle,
    ProductsViewProduct,
    ProductsAddToCart,
    ProductsBuyNow,
    ProductsCustomize,
    ProductsCurrency,
    ProductsFilter,
    ProductsSort,
    ProductsAll,
    ProductsNewest,
    ProductsPriceLow,
    ProductsPriceHigh,
    ProductsSize,
    ProductsPrice,
    ProductsSelectSize,
    ProductsSelectQuantity,
    ProductsDetails,
    ProductsFabric,
    ProductsCare,
    ProductsShipping,
    ProductsRelated,
    // Cart
    CartTitle,
    CartEmpty,
    CartSubtotal,
    CartCheckout,
    CartContinue,
    CartRemove,
    // Checkout
    CheckoutTitle,
    CheckoutStep1,
    CheckoutStep2,
    CheckoutStep3,
    CheckoutFirstName,
    CheckoutLastName,
    CheckoutEmail,
    CheckoutPhone,
    CheckoutAddress,
    CheckoutCity,
    CheckoutPlaceOrder,
    // Footer
    FooterBrand,
    FooterQuickLinks,
    FooterContact,
    FooterDescription,
    FooterRights,
    // About
    AboutTitle,
    AboutStory,
    AboutMission,
    AboutValues,
    // Customize
    CustomizeTitle,
    CustomizeUpload,
    CustomizeAddText,
    CustomizePreview,
    CustomizeAddToCart,
    // 404
    NotFoundTitle,
    NotFoundSubtitle,
    NotFoundBack,
}

impl MessageKey {
    /// Every key, in catalog order.
    pub const ALL: [Self; 75] = [
        Self::NavHome,
        Self::NavHoodies,
        Self::NavMen,
        Self::NavWomen,
        Self::NavYouth,
        Self::NavShop,
        Self::NavCustomize,
        Self::NavAbout,
        Self::NavCart,
        Self::HeroTitle,
        Self::HeroSubtitle,
        Self::HeroCta,
        Self::FeaturesPremium,
        Self::FeaturesExclusive,
        Self::FeaturesShipping,
        Self::CategoriesTitle,
        Self::CategoriesMen,
        Self::CategoriesWomen,
        Self::CategoriesYouth,
        Self::CategoriesExplore,
        Self::ProductsTitle,
        Self::ProductsViewProduct,
        Self::ProductsAddToCart,
        Self::ProductsBuyNow,
        Self::ProductsCustomize,
        Self::ProductsCurrency,
        Self::ProductsFilter,
        Self::ProductsSort,
        Self::ProductsAll,
        Self::ProductsNewest,
        Self::ProductsPriceLow,
        Self::ProductsPriceHigh,
        Self::ProductsSize,
        Self::ProductsPrice,
        Self::ProductsSelectSize,
        Self::ProductsSelectQuantity,
        Self::ProductsDetails,
        Self::ProductsFabric,
        Self::ProductsCare,
        Self::ProductsShipping,
        Self::ProductsRelated,
        Self::CartTitle,
        Self::CartEmpty,
        Self::CartSubtotal,
        Self::CartCheckout,
        Self::CartContinue,
        Self::CartRemove,
        Self::CheckoutTitle,
        Self::CheckoutStep1,
        Self::CheckoutStep2,
        Self::CheckoutStep3,
        Self::CheckoutFirstName,
        Self::CheckoutLastName,
        Self::CheckoutEmail,
        Self::CheckoutPhone,
        Self::CheckoutAddress,
        Self::CheckoutCity,
        Self::CheckoutPlaceOrder,
        Self::FooterBrand,
        Self::FooterQuickLinks,
        Self::FooterContact,
        Self::FooterDescription,
        Self::FooterRights,
        Self::AboutTitle,
        Self::AboutStory,
        Self::AboutMission,
        Self::AboutValues,
        Self::CustomizeTitle,
        Self::CustomizeUpload,
        Self::CustomizeAddText,
        Self::CustomizePreview,
        Self::CustomizeAddToCart,
        Self::NotFoundTitle,
        Self::NotFoundSubtitle,
        Self::NotFoundBack,
    ];

    /// The dotted string form of this key ("cart.title", "nav.home", ...).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::NavHome => "nav.home",
            Self::NavHoodies => "nav.hoodies",
            Self::NavMen => "nav.men",
            Self::NavWomen => "nav.women",
            Self::NavYouth => "nav.youth",
            Self::NavShop => "nav.shop",
            Self::NavCustomize => "nav.customize",
            Self::NavAbout => "nav.about",
            Self::NavCart => "nav.cart",
            Self::HeroTitle => "hero.title",
            Self::HeroSubtitle => "hero.subtitle",
            Self::HeroCta => "hero.cta",
            Self::FeaturesPremium => "features.premium",
            Self::FeaturesExclusive => "features.exclusive",
            Self::FeaturesShipping => "features.shipping",
            Self::CategoriesTitle => "categories.title",
            Self::CategoriesMen => "categories.men",
            Self::CategoriesWomen => "categories.women",
            Self::CategoriesYouth => "categories.youth",
            Self::CategoriesExplore => "categories.explore",
            Self::ProductsTitle => "products.title",
            Self::ProductsViewProduct => "products.viewProduct",
            Self::ProductsAddToCart => "products.addToCart",
            Self::ProductsBuyNow => "products.buyNow",
            Self::ProductsCustomize => "products.customize",
            Self::ProductsCurrency => "products.currency",
            Self::ProductsFilter => "products.filter",
            Self::ProductsSort => "products.sort",
            Self::ProductsAll => "products.all",
            Self::ProductsNewest => "products.newest",
            Self::ProductsPriceLow => "products.priceLow",
            Self::ProductsPriceHigh => "products.priceHigh",
            Self::ProductsSize => "products.size",
            Self::ProductsPrice => "products.price",
            Self::ProductsSelectSize => "products.selectSize",
            Self::ProductsSelectQuantity => "products.selectQuantity",
            Self::ProductsDetails => "products.details",
            Self::ProductsFabric => "products.fabric",
            Self::ProductsCare => "products.care",
            Self::ProductsShipping => "products.shipping",
            Self::ProductsRelated => "products.related",
            Self::CartTitle => "cart.title",
            Self::CartEmpty => "cart.empty",
            Self::CartSubtotal => "cart.subtotal",
            Self::CartCheckout => "cart.checkout",
            Self::CartContinue => "cart.continue",
            Self::CartRemove => "cart.remove",
            Self::CheckoutTitle => "checkout.title",
            Self::CheckoutStep1 => "checkout.step1",
            Self::CheckoutStep2 => "checkout.step2",
            Self::CheckoutStep3 => "checkout.step3",
            Self::CheckoutFirstName => "checkout.firstName",
            Self::CheckoutLastName => "checkout.lastName",
            Self::CheckoutEmail => "checkout.email",
            Self::CheckoutPhone => "checkout.phone",
            Self::CheckoutAddress => "checkout.address",
            Self::CheckoutCity => "checkout.city",
            Self::CheckoutPlaceOrder => "checkout.placeOrder",
            Self::FooterBrand => "footer.brand",
            Self::FooterQuickLinks => "footer.quickLinks",
            Self::FooterContact => "footer.contact",
            Self::FooterDescription => "footer.description",
            Self::FooterRights => "footer.rights",
            Self::AboutTitle => "about.title",
            Self::AboutStory => "about.story",
            Self::AboutMission => "about.mission",
            Self::AboutValues => "about.values",
            Self::CustomizeTitle => "customize.title",
            Self::CustomizeUpload => "customize.upload",
            Self::CustomizeAddText => "customize.addText",
            Self::CustomizePreview => "customize.preview",
            Self::CustomizeAddToCart => "customize.addToCart",
            Self::NotFoundTitle => "404.title",
            Self::NotFoundSubtitle => "404.subtitle",
            Self::NotFoundBack => "404.back",
        }
    }

    /// The display string for this key in the given language.
    #[must_use]
    pub const fn text(self, language: Language) -> &'static str {
        match language {
            Language::Ar => self.arabic(),
            Language::En => self.english(),
        }
    }

    /// Resolve a dotted string key against the catalog.
    ///
    /// Returns `None` for unknown keys; callers fall back to the raw key
    /// so missing translations stay visible in the UI.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.key() == raw)
    }

    const fn arabic(self) -> &'static str {
        match self {
            Self::NavHome => "الرئيسية",
            Self::NavHoodies => "الهوديات",
            Self::NavMen => "رجالي",
            Self::NavWomen => "نسائي",
            Self::NavYouth => "شبابي",
            Self::NavShop => "تسوق",
            Self::NavCustomize => "تخصيص",
            Self::NavAbout => "عنا",
            Self::NavCart => "السلة",
            Self::HeroTitle => "ليس مجرد قماش",
            Self::HeroSubtitle => "إنه بيان.",
            Self::HeroCta => "استعرض المجموعة",
            Self::FeaturesPremium => "خامات فاخرة",
            Self::FeaturesExclusive => "تصميم حصري",
            Self::FeaturesShipping => "توصيل داخل الأردن",
            Self::CategoriesTitle => "اختر أسلوبك",
            Self::CategoriesMen => "هودي رجالي",
            Self::CategoriesWomen => "هودي نسائي",
            Self::CategoriesYouth => "هودي شبابي",
            Self::CategoriesExplore => "استعرض",
            Self::ProductsTitle => "المجموعة",
            Self::ProductsViewProduct => "عرض المنتج",
            Self::ProductsAddToCart => "أضف إلى السلة",
            Self::ProductsBuyNow => "اشتري الآن",
            Self::ProductsCustomize => "تخصيص",
            Self::ProductsCurrency => "د.أ",
            Self::ProductsFilter => "تصفية",
            Self::ProductsSort => "ترتيب",
            Self::ProductsAll => "الكل",
            Self::ProductsNewest => "الأحدث",
            Self::ProductsPriceLow => "السعر: منخفض إلى مرتفع",
            Self::ProductsPriceHigh => "السعر: مرتفع إلى منخفض",
            Self::ProductsSize => "المقاس",
            Self::ProductsPrice => "السعر",
            Self::ProductsSelectSize => "اختر المقاس",
            Self::ProductsSelectQuantity => "الكمية",
            Self::ProductsDetails => "الوصف",
            Self::ProductsFabric => "الخامة",
            Self::ProductsCare => "الإرشادات",
            Self::ProductsShipping => "الشحن",
            Self::ProductsRelated => "منتجات مشابهة",
            Self::CartTitle => "السلة",
            Self::CartEmpty => "السلة فارغة",
            Self::CartSubtotal => "المجموع الفرعي",
            Self::CartCheckout => "إتمام الشراء",
            Self::CartContinue => "متابعة التسوق",
            Self::CartRemove => "إزالة",
            Self::CheckoutTitle => "إتمام الشراء",
            Self::CheckoutStep1 => "المعلومات",
            Self::CheckoutStep2 => "العنوان",
            Self::CheckoutStep3 => "الدفع",
            Self::CheckoutFirstName => "الاسم الأول",
            Self::CheckoutLastName => "الاسم الأخير",
            Self::CheckoutEmail => "البريد الإلكتروني",
            Self::CheckoutPhone => "الهاتف",
            Self::CheckoutAddress => "العنوان",
            Self::CheckoutCity => "المدينة",
            Self::CheckoutPlaceOrder => "تأكيد الطلب",
            Self::FooterBrand => "Dark Cat",
            Self::FooterQuickLinks => "روابط سريعة",
            Self::FooterContact => "تواصل معنا",
            Self::FooterDescription => "ستريت وير فاخر من الأردن.",
            Self::FooterRights => "جميع الحقوق محفوظة",
            Self::AboutTitle => "عنا",
            Self::AboutStory => "قصتنا",
            Self::AboutMission => "مهمتنا",
            Self::AboutValues => "قيمنا",
            Self::CustomizeTitle => "صمم هوديك",
            Self::CustomizeUpload => "رفع صورة",
            Self::CustomizeAddText => "إضافة نص",
            Self::CustomizePreview => "معاينة",
            Self::CustomizeAddToCart => "أضف للسلة",
            Self::NotFoundTitle => "لا شيء هنا",
            Self::NotFoundSubtitle => "الصفحة غير موجودة",
            Self::NotFoundBack => "العودة للرئيسية",
        }
    }

    const fn english(self) -> &'static str {
        match self {
            Self::NavHome => "HOME",
            Self::NavHoodies => "HOODIES",
            Self::NavMen => "MEN",
            Self::NavWomen => "WOMEN",
            Self::NavYouth => "YOUTH",
            Self::NavShop => "SHOP",
            Self::NavCustomize => "CUSTOMIZE",
            Self::NavAbout => "ABOUT",
            Self::NavCart => "Cart",
            Self::HeroTitle => "NOT JUST FABRIC",
            Self::HeroSubtitle => "IT'S A STATEMENT.",
            Self::HeroCta => "EXPLORE COLLECTION",
            Self::FeaturesPremium => "Premium Materials",
            Self::FeaturesExclusive => "Exclusive Design",
            Self::FeaturesShipping => "Jordan Delivery",
            Self::CategoriesTitle => "Choose Your Style",
            Self::CategoriesMen => "Men's Hoodie",
            Self::CategoriesWomen => "Women's Hoodie",
            Self::CategoriesYouth => "Youth Hoodie",
            Self::CategoriesExplore => "Explore",
            Self::ProductsTitle => "COLLECTION",
            Self::ProductsViewProduct => "VIEW PRODUCT",
            Self::ProductsAddToCart => "ADD TO CART",
            Self::ProductsBuyNow => "BUY NOW",
            Self::ProductsCustomize => "CUSTOMIZE",
            Self::ProductsCurrency => "JOD",
            Self::ProductsFilter => "Filter",
            Self::ProductsSort => "Sort",
            Self::ProductsAll => "All",
            Self::ProductsNewest => "Newest",
            Self::ProductsPriceLow => "Price: Low to High",
            Self::ProductsPriceHigh => "Price: High to Low",
            Self::ProductsSize => "Size",
            Self::ProductsPrice => "Price",
            Self::ProductsSelectSize => "Select Size",
            Self::ProductsSelectQuantity => "Quantity",
            Self::ProductsDetails => "Description",
            Self::ProductsFabric => "Material",
            Self::ProductsCare => "Care",
            Self::ProductsShipping => "Shipping",
            Self::ProductsRelated => "Related Products",
            Self::CartTitle => "CART",
            Self::CartEmpty => "Your cart is empty.",
            Self::CartSubtotal => "Subtotal",
            Self::CartCheckout => "CHECKOUT",
            Self::CartContinue => "Continue Shopping",
            Self::CartRemove => "Remove",
            Self::CheckoutTitle => "CHECKOUT",
            Self::CheckoutStep1 => "Information",
            Self::CheckoutStep2 => "Address",
            Self::CheckoutStep3 => "Payment",
            Self::CheckoutFirstName => "First Name",
            Self::CheckoutLastName => "Last Name",
            Self::CheckoutEmail => "Email",
            Self::CheckoutPhone => "Phone",
            Self::CheckoutAddress => "Address",
            Self::CheckoutCity => "City",
            Self::CheckoutPlaceOrder => "PLACE ORDER",
            Self::FooterBrand => "Dark Cat",
            Self::FooterQuickLinks => "Quick Links",
            Self::FooterContact => "Contact Us",
            Self::FooterDescription => "Premium streetwear from Jordan.",
            Self::FooterRights => "All rights reserved",
            Self::AboutTitle => "ABOUT",
            Self::AboutStory => "Our Story",
            Self::AboutMission => "Our Mission",
            Self::AboutValues => "Our Values",
            Self::CustomizeTitle => "DESIGN YOUR HOODIE",
            Self::CustomizeUpload => "Upload Image",
            Self::CustomizeAddText => "Add Text",
            Self::CustomizePreview => "Preview",
            Self::CustomizeAddToCart => "ADD TO CART",
            Self::NotFoundTitle => "NOTHING HERE",
            Self::NotFoundSubtitle => "Page not found",
            Self::NotFoundBack => "BACK TO HOME",
        }
    }
}
