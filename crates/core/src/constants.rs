/// Currency every `rate_to_base` is expressed against
pub const BASE_CURRENCY: &str = "EUR";

/// Country used when nothing has been persisted yet
pub const DEFAULT_COUNTRY_CODE: &str = "FR";

/// Fallback dictionary language
pub const DEFAULT_LANGUAGE: &str = "fr";

/// Key under which the locale preferences are persisted
pub const LOCALE_STORAGE_KEY: &str = "bankdemo.locale";

/// Decimal digits shown for every amount
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
