use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default monthly revenue target.
pub const DEFAULT_MONTHLY_GOAL: Decimal = dec!(100000);

/// Maximum number of clients kept in the ranking.
pub const RANKING_LIMIT: usize = 10;

/// Label used when no client can be ranked.
pub const UNKNOWN_CLIENT: &str = "N/D";

pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";
pub const DEFAULT_SHEET_NAME: &str = "Livro Caixa";
pub const DEFAULT_FILE_NAME: &str = "Livro-Caixa.xlsx";

pub const DEFAULT_DATE_COLUMN: &str = "Data do Pedido";
pub const DEFAULT_VALUE_COLUMN: &str = "Valor Total";
pub const DEFAULT_COMMISSION_COLUMN: &str = "Comissão";
pub const DEFAULT_QUANTITY_COLUMN: &str = "Quantidade";
pub const DEFAULT_CLIENT_COLUMN: &str = "Cliente";
