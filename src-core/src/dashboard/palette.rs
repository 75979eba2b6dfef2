/// Categorical colors for the client ranking, in rank order.
/// Same 20 hues as matplotlib's `tab20` map.
const CLIENT_PALETTE: [(u8, u8, u8); 20] = [
    (31, 119, 180),
    (174, 199, 232),
    (255, 127, 14),
    (255, 187, 120),
    (44, 160, 44),
    (152, 223, 138),
    (214, 39, 40),
    (255, 152, 150),
    (148, 103, 189),
    (197, 176, 213),
    (140, 86, 75),
    (196, 156, 148),
    (227, 119, 194),
    (247, 182, 210),
    (127, 127, 127),
    (199, 199, 199),
    (188, 189, 34),
    (219, 219, 141),
    (23, 190, 207),
    (158, 218, 229),
];

const CLIENT_ALPHA: f32 = 0.85;

pub const REVENUE_COLOR: &str = "#00FFB4";
pub const COMMISSION_COLOR: &str = "#FFD740";

/// Color of the bar at rank `index`; cycles when there are more ranks than colors
pub fn client_color(index: usize) -> String {
    let (r, g, b) = CLIENT_PALETTE[index % CLIENT_PALETTE.len()];
    format!("rgba({r},{g},{b},{CLIENT_ALPHA})")
}

pub fn client_colors(count: usize) -> Vec<String> {
    (0..count).map(client_color).collect()
}
