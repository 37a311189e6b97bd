/// Fulfilment stages in the order they happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineStage {
    OrderConfirmed,
    Processing,
    QcVerification,
    ReadyForDispatch,
    InTransit,
    Delivered,
}

impl TimelineStage {
    pub const ALL: [TimelineStage; 6] = [
        Self::OrderConfirmed,
        Self::Processing,
        Self::QcVerification,
        Self::ReadyForDispatch,
        Self::InTransit,
        Self::Delivered,
    ];

    /// 1-based position on the timeline.
    pub fn step(&self) -> u8 {
        match self {
            Self::OrderConfirmed => 1,
            Self::Processing => 2,
            Self::QcVerification => 3,
            Self::ReadyForDispatch => 4,
            Self::InTransit => 5,
            Self::Delivered => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OrderConfirmed => "Order Confirmed",
            Self::Processing => "Processing",
            Self::QcVerification => "QC Verification",
            Self::ReadyForDispatch => "Ready for Dispatch",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
        }
    }

    pub fn details(&self) -> &'static str {
        match self {
            Self::OrderConfirmed => "Purchase order generated and sent to supplier",
            Self::Processing => "Material preparation and quality checks in progress",
            Self::QcVerification => "Quality control tests passed - Material QC approved",
            Self::ReadyForDispatch => "Material packed and ready for shipment",
            Self::InTransit => "Shipment in progress",
            Self::Delivered => "Material received at destination",
        }
    }

    /// Milestones are never "in progress": they are either reached or not.
    fn is_milestone(&self) -> bool {
        matches!(self, Self::OrderConfirmed | Self::Delivered)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageState {
    Completed,
    Active,
    Pending,
}

impl StageState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Active => "In Progress",
            Self::Pending => "Pending",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderTimeline {
    current_step: u8,
    stages: Vec<(TimelineStage, StageState)>,
}

impl OrderTimeline {
    pub fn new(current_step: u8) -> Self {
        let stages = TimelineStage::ALL
            .into_iter()
            .map(|stage| (stage, state_of(stage, current_step)))
            .collect();
        Self {
            current_step,
            stages,
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn stages(&self) -> &[(TimelineStage, StageState)] {
        &self.stages
    }

    pub fn state(&self, stage: TimelineStage) -> StageState {
        state_of(stage, self.current_step)
    }

    pub fn is_delivered(&self) -> bool {
        self.state(TimelineStage::Delivered) == StageState::Completed
    }

    /// Share of stages completed, 0..=100.
    pub fn progress_pct(&self) -> f64 {
        let done = self
            .stages
            .iter()
            .filter(|(_, state)| *state == StageState::Completed)
            .count();
        done as f64 / self.stages.len() as f64 * 100.0
    }
}

fn state_of(stage: TimelineStage, current: u8) -> StageState {
    let step = stage.step();
    if stage.is_milestone() {
        return if current >= step {
            StageState::Completed
        } else {
            StageState::Pending
        };
    }
    match current.cmp(&step) {
        std::cmp::Ordering::Greater => StageState::Completed,
        std::cmp::Ordering::Equal => StageState::Active,
        std::cmp::Ordering::Less => StageState::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(timeline: &OrderTimeline) -> Vec<StageState> {
        timeline.stages().iter().map(|(_, state)| *state).collect()
    }

    #[test]
    fn in_transit_order() {
        use StageState::*;
        let timeline = OrderTimeline::new(5);
        assert_eq!(
            states(&timeline),
            vec![Completed, Completed, Completed, Completed, Active, Pending]
        );
        assert!(!timeline.is_delivered());
        assert!((timeline.progress_pct() - 66.666).abs() < 0.01);
    }

    #[test]
    fn milestones_complete_on_arrival() {
        use StageState::*;
        assert_eq!(states(&OrderTimeline::new(1))[0], Completed);
        assert_eq!(states(&OrderTimeline::new(1))[1], Pending);

        let delivered = OrderTimeline::new(6);
        assert_eq!(states(&delivered), vec![Completed; 6]);
        assert!(delivered.is_delivered());
        assert_eq!(delivered.progress_pct(), 100.0);
    }

    #[test]
    fn not_started_is_all_pending() {
        let timeline = OrderTimeline::new(0);
        assert_eq!(states(&timeline), vec![StageState::Pending; 6]);
        assert_eq!(timeline.progress_pct(), 0.0);
        assert_eq!(OrderTimeline::new(9).state(TimelineStage::InTransit), StageState::Completed);
    }
}
