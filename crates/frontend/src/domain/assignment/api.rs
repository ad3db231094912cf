use contracts::domain::assignment::{
    AssignmentDto, AutoAssignQuery, NewAssignmentDto, TechnicianAssignmentReportDto,
};
use contracts::shared::hal::TechnicianReportCollection;
use web_sys::AbortSignal;

use crate::shared::api::{get_json, post_empty, post_json, ApiError};

/// Отчёт по назначениям техников (`GET /api/assignment/report`)
pub async fn fetch_report(
    signal: Option<&AbortSignal>,
) -> Result<Vec<TechnicianAssignmentReportDto>, ApiError> {
    let collection: TechnicianReportCollection = get_json("/api/assignment/report", signal).await?;
    let items = collection.into_items();
    log::debug!("technician report loaded: {} rows", items.len());
    Ok(items)
}

/// Ручное назначение техника
pub async fn create_assignment(dto: &NewAssignmentDto) -> Result<AssignmentDto, ApiError> {
    let created: AssignmentDto = post_json("/api/assignment", dto).await?;
    log::info!(
        "assignment {} created: technician {} -> order {}",
        created.id,
        created.technician_id,
        created.order_id
    );
    Ok(created)
}

fn auto_assign_path(order_id: i64) -> Result<String, ApiError> {
    let query = serde_qs::to_string(&AutoAssignQuery { order_id })
        .map_err(|e| ApiError::Malformed(e.to_string()))?;
    Ok(format!("/api/assignment/auto?{query}"))
}

/// Автоматическое назначение: техника выбирает сервер
pub async fn request_auto_assignment(order_id: i64) -> Result<(), ApiError> {
    post_empty::<()>(&auto_assign_path(order_id)?, None).await?;
    log::info!("auto assignment requested for order {order_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_assign_query_string() {
        assert_eq!(auto_assign_path(41).unwrap(), "/api/assignment/auto?orderId=41");
    }
}
