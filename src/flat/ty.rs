/// The named flat colors.  Each one comes in a [`Shade::Light`] and a
/// [`Shade::Dark`] version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FlatColor {
    Black,
    Blue,
    Brown,
    Coffee,
    ForestGreen,
    Gray,
    Green,
    Lime,
    Magenta,
    Maroon,
    Mint,
    NavyBlue,
    Orange,
    Pink,
    Plum,
    PowderBlue,
    Purple,
    Red,
    Sand,
    SkyBlue,
    Teal,
    Watermelon,
    White,
    Yellow,
}

/// Shade of a flat color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    /// The regular version of the color.
    Light,
    /// A darker, usually more saturated, version of the color.
    Dark,
}

impl FlatColor {
    /// All flat colors, in alphabetical order.
    pub const ALL: [FlatColor; 24] = {
        use FlatColor::*;
        [Black, Blue, Brown, Coffee, ForestGreen, Gray, Green, Lime,
         Magenta, Maroon, Mint, NavyBlue, Orange, Pink, Plum, PowderBlue,
         Purple, Red, Sand, SkyBlue, Teal, Watermelon, White, Yellow]
    };

    /// A human readable name, e.g. "forest green".
    pub fn name(self) -> &'static str {
        use FlatColor::*;
        match self {
            Black => "black",
            Blue => "blue",
            Brown => "brown",
            Coffee => "coffee",
            ForestGreen => "forest green",
            Gray => "gray",
            Green => "green",
            Lime => "lime",
            Magenta => "magenta",
            Maroon => "maroon",
            Mint => "mint",
            NavyBlue => "navy blue",
            Orange => "orange",
            Pink => "pink",
            Plum => "plum",
            PowderBlue => "powder blue",
            Purple => "purple",
            Red => "red",
            Sand => "sand",
            SkyBlue => "sky blue",
            Teal => "teal",
            Watermelon => "watermelon",
            White => "white",
            Yellow => "yellow",
        }
    }

    /// Hue (degrees), saturation and brightness (percent) of both
    /// shades.
    pub(crate) fn hsb_data(self) -> ([f64; 3], [f64; 3]) {
        use FlatColor::*;
        match self {
            Black => ([0., 0., 17.], [0., 0., 15.]),
            Blue => ([224., 50., 63.], [224., 56., 51.]),
            Brown => ([24., 45., 37.], [25., 45., 31.]),
            Coffee => ([25., 31., 64.], [25., 34., 56.]),
            ForestGreen => ([138., 45., 37.], [135., 44., 31.]),
            Gray => ([184., 10., 65.], [184., 10., 55.]),
            Green => ([145., 77., 80.], [145., 78., 68.]),
            Lime => ([74., 70., 78.], [74., 81., 69.]),
            Magenta => ([283., 51., 71.], [282., 61., 68.]),
            Maroon => ([5., 65., 47.], [4., 68., 40.]),
            Mint => ([168., 86., 74.], [168., 86., 63.]),
            NavyBlue => ([210., 45., 37.], [210., 45., 31.]),
            Orange => ([28., 85., 90.], [24., 100., 83.]),
            Pink => ([324., 49., 96.], [327., 57., 83.]),
            Plum => ([300., 45., 37.], [300., 46., 31.]),
            PowderBlue => ([222., 24., 95.], [222., 28., 84.]),
            Purple => ([253., 52., 77.], [253., 56., 64.]),
            Red => ([6., 74., 91.], [6., 78., 75.]),
            Sand => ([42., 25., 94.], [42., 30., 84.]),
            SkyBlue => ([204., 76., 86.], [204., 78., 73.]),
            Teal => ([195., 55., 51.], [196., 54., 45.]),
            Watermelon => ([356., 53., 94.], [358., 61., 85.]),
            White => ([192., 2., 95.], [204., 5., 78.]),
            Yellow => ([48., 99., 100.], [40., 100., 100.]),
        }
    }
}
