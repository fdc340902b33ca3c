//! Drive a controller against the fake service into a given phase.

use std::sync::Arc;

use hunt_coordinator::{AppError, PollIntervals, SessionController};

use super::fake_service::FakeGameService;

/// Four players, `[[P1, P2], [P3, P4]]`, session created, in VP redistribution.
pub async fn four_player_controller(
    intervals: PollIntervals,
) -> Result<(Arc<FakeGameService>, SessionController), AppError> {
    let fake = FakeGameService::new();
    let mut controller = SessionController::new(fake.clone(), intervals);
    controller.configure(4, 2)?;
    controller.assign(2, 1)?;
    controller.assign(3, 1)?;
    controller.confirm_assignment().await?;
    Ok((fake, controller))
}

/// Every alliance confirms its current VP, then the round starts in `order`.
pub async fn controller_in_round(
    intervals: PollIntervals,
    order: &[&str],
) -> Result<(Arc<FakeGameService>, SessionController), AppError> {
    let (fake, mut controller) = four_player_controller(intervals).await?;
    fake.edit(|s| s.next_turn_order = Some(order.iter().map(|p| p.to_string()).collect()));
    confirm_all_unchanged(&mut controller).await?;
    controller.start_round().await?;
    Ok((fake, controller))
}

pub async fn confirm_all_unchanged(controller: &mut SessionController) -> Result<(), AppError> {
    let alliances: Vec<(String, Vec<i64>)> = controller
        .snapshot()
        .map(|s| {
            s.alliances
                .iter()
                .map(|a| (a.name.clone(), a.vp_distribution.clone()))
                .collect()
        })
        .unwrap_or_default();
    for (name, vps) in alliances {
        controller.confirm_redistribution(&name, &vps).await?;
    }
    Ok(())
}
