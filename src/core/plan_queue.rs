use crate::core::{
    Adjusted, Amount, Catalog, Event, Notifier, OfferingId, QueueLine, RenderLine, Renderer,
};
use crate::utils::error::{GymError, Result};

/// Ordered selection of offerings with accumulated quantities.
///
/// Lines keep the order in which their offering was first added. At most one
/// line exists per offering and a line never sits at quantity zero. Every
/// operation validates before it mutates, so a failed call leaves the queue
/// untouched and fires no callbacks.
///
/// The total is derived from the catalog on demand and never stored.
pub struct PlanQueue<C: Catalog, R: Renderer, N: Notifier> {
    catalog: C,
    renderer: R,
    notifier: N,
    lines: Vec<QueueLine>,
}

impl<C: Catalog, R: Renderer, N: Notifier> PlanQueue<C, R, N> {
    pub fn new(catalog: C, renderer: R, notifier: N) -> Self {
        Self {
            catalog,
            renderer,
            notifier,
            lines: Vec::new(),
        }
    }

    /// Adds one unit of `offering_id`, appending a new line if needed.
    pub fn add(&mut self, offering_id: OfferingId) -> Result<QueueLine> {
        let title = self
            .catalog
            .resolve(offering_id)
            .ok_or(GymError::UnknownOffering { offering_id })?
            .title
            .clone();

        let line = match self.position(offering_id) {
            Some(index) => {
                let quantity = self.lines[index]
                    .quantity
                    .checked_add(1)
                    .ok_or(GymError::QuantityOverflow { offering_id })?;
                self.lines[index].quantity = quantity;
                self.lines[index]
            }
            None => {
                let line = QueueLine {
                    offering_id,
                    quantity: 1,
                };
                self.lines.push(line);
                line
            }
        };

        tracing::debug!(
            "Added offering {} to plan (quantity {})",
            offering_id,
            line.quantity
        );

        self.render();
        self.notifier.notify(&Event::Added { offering_id, title });

        Ok(line)
    }

    /// Changes a line's quantity by `delta`. Reaching zero or below removes the line.
    pub fn adjust_quantity(&mut self, offering_id: OfferingId, delta: i32) -> Result<Adjusted> {
        if delta == 0 {
            return Err(GymError::ZeroDelta);
        }

        let Some(index) = self.position(offering_id) else {
            tracing::warn!("Quantity change for offering {} not in plan", offering_id);
            return Err(GymError::LineNotFound { offering_id });
        };

        let new_quantity = i64::from(self.lines[index].quantity) + i64::from(delta);
        if new_quantity <= 0 {
            self.remove_at(index);
            return Ok(Adjusted::Removed(offering_id));
        }

        let quantity = u32::try_from(new_quantity)
            .map_err(|_| GymError::QuantityOverflow { offering_id })?;
        self.lines[index].quantity = quantity;
        let line = self.lines[index];

        tracing::debug!("Offering {} quantity now {}", offering_id, quantity);
        self.render();

        Ok(Adjusted::Updated(line))
    }

    /// Removes the line for `offering_id`. Absent ids are a silent no-op.
    pub fn remove(&mut self, offering_id: OfferingId) -> Option<QueueLine> {
        let index = self.position(offering_id)?;
        Some(self.remove_at(index))
    }

    /// Empties the queue and returns the ids that were dropped.
    pub fn clear(&mut self) -> Vec<OfferingId> {
        let cleared: Vec<OfferingId> = self.lines.drain(..).map(|l| l.offering_id).collect();
        tracing::debug!("Cleared {} line(s) from plan", cleared.len());

        self.render();
        self.renderer.queue_emptied();

        cleared
    }

    pub fn total(&self) -> Amount {
        self.lines
            .iter()
            .filter_map(|line| {
                self.catalog
                    .resolve(line.offering_id)
                    .map(|offering| offering.unit_price.times(line.quantity))
            })
            .sum()
    }

    /// Number of distinct lines, not the sum of quantities.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[QueueLine] {
        &self.lines
    }

    pub fn quantity_of(&self, offering_id: OfferingId) -> Option<u32> {
        self.position(offering_id).map(|i| self.lines[i].quantity)
    }

    pub fn contains(&self, offering_id: OfferingId) -> bool {
        self.position(offering_id).is_some()
    }

    pub fn render_lines(&self) -> Vec<RenderLine> {
        self.lines
            .iter()
            .filter_map(|line| {
                self.catalog
                    .resolve(line.offering_id)
                    .map(|offering| RenderLine {
                        offering_id: line.offering_id,
                        title: offering.title.clone(),
                        unit_price: offering.unit_price,
                        quantity: line.quantity,
                    })
            })
            .collect()
    }

    // 線性搜尋即可，目錄只有數十筆
    fn position(&self, offering_id: OfferingId) -> Option<usize> {
        self.lines.iter().position(|l| l.offering_id == offering_id)
    }

    fn remove_at(&mut self, index: usize) -> QueueLine {
        let line = self.lines.remove(index);
        tracing::debug!("Removed offering {} from plan", line.offering_id);

        self.render();
        if self.lines.is_empty() {
            self.renderer.queue_emptied();
        }

        line
    }

    fn render(&mut self) {
        let lines = self.render_lines();
        let total = self.total();
        self.renderer.render(&lines, total);
    }
}
