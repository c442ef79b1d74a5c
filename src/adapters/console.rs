use crate::core::{Amount, Event, NoticeLevel, Notifier, RenderLine, Renderer};

/// Prints the plan to stdout after every change.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    renders: usize,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }
}

/// Text form of the plan panel.
pub fn format_plan(lines: &[RenderLine], total: Amount) -> String {
    if lines.is_empty() {
        return "No programs selected yet\nTotal: $0/month".to_string();
    }

    let mut out: Vec<String> = lines
        .iter()
        .map(|line| {
            format!(
                "{:>3} x {:<32} {}/month  = {}",
                line.quantity,
                line.title,
                line.unit_price,
                line.subtotal()
            )
        })
        .collect();
    out.push(format!("Total: {}/month", total));
    out.join("\n")
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, lines: &[RenderLine], total: Amount) {
        self.renders += 1;
        println!("{}", format_plan(lines, total));
    }

    fn queue_emptied(&mut self) {
        tracing::debug!("Plan panel collapsed");
    }
}

/// Sends toasts to the log instead of a screen.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, event: &Event) {
        match event.level() {
            NoticeLevel::Success => tracing::info!("✅ {} {}", event.title(), event.message()),
            NoticeLevel::Error => tracing::warn!("❌ {} {}", event.title(), event.message()),
            NoticeLevel::Info => tracing::info!("ℹ️ {}", event.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OfferingId;

    #[test]
    fn test_format_plan() {
        let lines = vec![RenderLine {
            offering_id: OfferingId(1),
            title: "Strength Training Fundamentals".to_string(),
            unit_price: Amount(45),
            quantity: 2,
        }];
        let text = format_plan(&lines, Amount(90));
        assert!(text.contains("Strength Training Fundamentals"));
        assert!(text.contains("= $90"));
        assert!(text.ends_with("Total: $90/month"));

        assert_eq!(
            format_plan(&[], Amount::ZERO),
            "No programs selected yet\nTotal: $0/month"
        );
    }

    #[test]
    fn test_console_renderer_counts_renders() {
        let mut renderer = ConsoleRenderer::new();
        renderer.render(&[], Amount::ZERO);
        renderer.queue_emptied();
        renderer.render(&[], Amount::ZERO);
        assert_eq!(renderer.render_count(), 2);
    }
}
