use finance_domain::breakdown::{ChartData, TRACKING_DISABLED_LABEL};
use finance_domain::formatting::{format_currency, hex_to_rgb, DEFAULT_CATEGORY_COLOR};
use finance_domain::summary::percentage;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_WIDTH: u32 = 640;
const CANVAS_HEIGHT: u32 = 320;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartStyle {
    /// One bar per category
    Bars,
    /// A single 100% bar split by category share
    Share,
}

impl ChartStyle {
    fn label(&self) -> &'static str {
        match self {
            ChartStyle::Bars => "Amounts",
            ChartStyle::Share => "Share",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpenseChartProps {
    pub data: ChartData,
    pub currency_symbol: AttrValue,
    #[prop_or(AttrValue::Static("Expense Breakdown"))]
    pub title: AttrValue,
}

pub enum Msg {
    DrawChart,
    SetStyle(ChartStyle),
}

/// Expense chart drawn on a canvas with plotters
pub struct ExpenseChart {
    canvas_ref: NodeRef,
    style: ChartStyle,
}

impl Component for ExpenseChart {
    type Message = Msg;
    type Properties = ExpenseChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            style: ChartStyle::Bars,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DrawChart => {
                self.draw_chart(&ctx.props().data);
                false
            }
            Msg::SetStyle(style) => {
                self.style = style;
                true
            }
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        ctx.link().send_message(Msg::DrawChart);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let total = props.data.total();

        html! {
            <div class="chart-container">
                <div class="chart-title-header">
                    <h3 class="chart-title">{&props.title}</h3>
                    <div class="chart-style-selector">
                        {for [ChartStyle::Bars, ChartStyle::Share].iter().map(|style| {
                            let style = *style;
                            let onclick = link.callback(move |_: MouseEvent| Msg::SetStyle(style));
                            let class = classes!("chart-style-button", (style == self.style).then_some("active"));
                            html! {
                                <button {class} {onclick}>{style.label()}</button>
                            }
                        })}
                    </div>
                </div>

                if props.data.is_disabled() {
                    <div class="chart-empty">
                        <i class="fas fa-eye-slash chart-empty-icon"></i>
                        <p>{TRACKING_DISABLED_LABEL}</p>
                    </div>
                } else if props.data.values.is_empty() || total <= 0.0 {
                    <div class="chart-empty">
                        <i class="fas fa-chart-bar chart-empty-icon"></i>
                        <p>{"No expense data available for chart"}</p>
                    </div>
                } else {
                    <>
                        <div class="chart-content">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="expense-chart-canvas"
                                width={CANVAS_WIDTH.to_string()}
                                height={CANVAS_HEIGHT.to_string()}
                            ></canvas>
                        </div>
                        <ul class="chart-legend">
                            {for props.data.ranked().into_iter().map(|(label, value, color)| html! {
                                <li class="legend-item">
                                    <span class="legend-swatch" style={format!("background: {};", color)}></span>
                                    <span class="legend-label">{label}</span>
                                    <span class="legend-value">
                                        {format!(
                                            "{} ({:.1}%)",
                                            format_currency(value, &props.currency_symbol),
                                            percentage(value, total)
                                        )}
                                    </span>
                                </li>
                            })}
                        </ul>
                    </>
                }
            </div>
        }
    }
}

fn rgb(hex: &str) -> RGBColor {
    let (r, g, b) = hex_to_rgb(hex)
        .or_else(|| hex_to_rgb(DEFAULT_CATEGORY_COLOR))
        .unwrap_or((201, 203, 207));
    RGBColor(r, g, b)
}

impl ExpenseChart {
    fn draw_chart(&self, data: &ChartData) {
        if data.is_disabled() || data.values.is_empty() || data.total() <= 0.0 {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let drawn = match self.style {
            ChartStyle::Bars => Self::draw_bars(&root, data),
            ChartStyle::Share => Self::draw_share(&root, data),
        };
        if drawn.is_some() {
            let _ = root.present();
        }
    }

    fn draw_bars(root: &DrawingArea<CanvasBackend, plotters::coord::Shift>, data: &ChartData) -> Option<()> {
        let count = data.values.len() as f64;
        let max_value = data.values.iter().copied().fold(0.0_f64, f64::max);
        let y_max = (max_value * 1.1).max(1.0);

        let mut chart = ChartBuilder::on(root)
            .margin(15)
            .x_label_area_size(10)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..count, 0.0..y_max)
            .ok()?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(0)
            .y_labels(6)
            .y_label_formatter(&|v| format!("{:.0}", v))
            .label_style(("sans-serif", 12, &RGBColor(102, 102, 102)))
            .axis_style(&RGBColor(230, 230, 230))
            .light_line_style(&RGBColor(245, 245, 245))
            .draw()
            .ok()?;

        chart
            .draw_series(data.values.iter().zip(&data.colors).enumerate().map(|(i, (value, color))| {
                let x = i as f64;
                Rectangle::new([(x + 0.15, 0.0), (x + 0.85, *value)], rgb(color).filled())
            }))
            .ok()?;

        Some(())
    }

    fn draw_share(root: &DrawingArea<CanvasBackend, plotters::coord::Shift>, data: &ChartData) -> Option<()> {
        let total = data.total();

        let mut chart = ChartBuilder::on(root)
            .margin(15)
            .x_label_area_size(30)
            .build_cartesian_2d(0.0..100.0, 0.0..1.0)
            .ok()?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(0)
            .x_labels(6)
            .x_label_formatter(&|v| format!("{:.0}%", v))
            .label_style(("sans-serif", 12, &RGBColor(102, 102, 102)))
            .draw()
            .ok()?;

        let mut start = 0.0;
        let mut segments = Vec::with_capacity(data.values.len());
        for (value, color) in data.values.iter().zip(&data.colors) {
            let width = percentage(*value, total);
            segments.push(Rectangle::new([(start, 0.3), (start + width, 0.7)], rgb(color).filled()));
            start += width;
        }
        chart.draw_series(segments).ok()?;

        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_falls_back_to_default_colour() {
        let RGBColor(r, g, b) = rgb("#FF6384");
        assert_eq!((r, g, b), (255, 99, 132));

        let RGBColor(r, g, b) = rgb("not a colour");
        assert_eq!((r, g, b), (201, 203, 207));
    }
}
