//! Radar chart rendering (polar curves over sector shading)

use charming::{
    Chart, ImageRenderer,
    component::{Legend, RadarCoordinate},
    datatype::DataPointItem,
    element::{
        AreaStyle, AxisLine, Color, ItemStyle, Label, LineStyle, LineStyleType, Orient, SplitArea,
        SplitLine, Symbol, TextStyle,
    },
    renderer::ImageFormat,
    series::{Pie, Radar},
};

use super::colors::{
    COLOR_BACKGROUND, COLOR_MARKER, COLOR_RING, COLOR_SPOKE, COLOR_TEXT, FILL_OPACITY,
    SECTOR_COLORS, SECTOR_OPACITY, with_alpha,
};
use super::{CHART_HEIGHT, CHART_WIDTH, ConfigChartData, legend_entries, seen_label, unseen_label};
use crate::data::{NUM_DIMS, NUM_RINGS, R_OUTER, SECTOR_SIZES};

/// Polar center and radius, shared by the radar grid and the wedge layer
/// so sector boundaries line up with the radial spokes
const POLAR_CENTER: [&str; 2] = ["40%", "50%"];
const POLAR_RADIUS: &str = "62%";

/// Render the comparison radar chart to a PNG file.
///
/// Every curve must carry exactly one sample per angular dimension; the
/// radar coordinate system joins the last sample back to the first.
pub fn render_radar_chart(configs: &[ConfigChartData], output_path: &str) -> Result<(), String> {
    if configs.is_empty() {
        return Err("Chart requires at least one configuration".to_string());
    }
    for config in configs {
        if config.seen.len() != NUM_DIMS || config.unseen.len() != NUM_DIMS {
            return Err(format!(
                "Configuration '{}' must have {} samples per curve",
                config.name, NUM_DIMS
            ));
        }
    }

    // Unlabeled dimensions, all sharing the same radial scale
    let indicators: Vec<(&str, i64)> = (0..NUM_DIMS).map(|_| ("", R_OUTER as i64)).collect();

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .legend(
            Legend::new()
                .data(legend_entries(configs))
                .orient(Orient::Vertical)
                .right("2%")
                .top("8%")
                .item_gap(20)
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(22)),
        )
        .radar(
            RadarCoordinate::new()
                .indicator(indicators)
                .shape("circle")
                .center(POLAR_CENTER.to_vec())
                .radius(POLAR_RADIUS)
                .split_number(NUM_RINGS as i32)
                .axis_line(
                    AxisLine::new().line_style(LineStyle::new().color(COLOR_SPOKE).width(1.5)),
                )
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().color(COLOR_RING).width(1.5)),
                )
                .split_area(SplitArea::new().show(false)),
        );

    // Background wedges first, so every curve paints above them. Pie slices
    // start at the top of the circle like the radar grid, and the two
    // slice values split the 11 angular slots at a spoke boundary.
    let wedges: Vec<DataPointItem> = SECTOR_SIZES
        .iter()
        .zip(SECTOR_COLORS)
        .map(|(&size, color)| {
            DataPointItem::new(size as f64)
                .item_style(ItemStyle::new().color(color).opacity(SECTOR_OPACITY))
        })
        .collect();

    chart = chart.series(
        Pie::new()
            .center(POLAR_CENTER.to_vec())
            .radius(POLAR_RADIUS)
            .label(Label::new().show(false))
            .data(wedges),
    );

    // Seen curves: solid stroke with a translucent fill
    for config in configs {
        chart = chart.series(
            Radar::new()
                .name(seen_label(&config.name))
                .symbol(Symbol::Circle)
                .symbol_size(10)
                .line_style(LineStyle::new().color(config.color).width(3))
                .area_style(AreaStyle::new().color(with_alpha(config.color, FILL_OPACITY)))
                .item_style(ItemStyle::new().color(COLOR_MARKER))
                .data(vec![
                    DataPointItem::new(config.seen.clone()).name(seen_label(&config.name)),
                ]),
        );
    }

    // Unseen curves: dashed stroke, markers only, no fill
    for config in configs {
        chart = chart.series(
            Radar::new()
                .name(unseen_label(&config.name))
                .symbol(Symbol::Circle)
                .symbol_size(10)
                .line_style(
                    LineStyle::new()
                        .color(config.color)
                        .width(3)
                        .type_(LineStyleType::Dashed),
                )
                .item_style(ItemStyle::new().color(COLOR_MARKER))
                .data(vec![
                    DataPointItem::new(config.unseen.clone()).name(unseen_label(&config.name)),
                ]),
        );
    }

    // Render to PNG
    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}
