use crate::catalog::DeliveryRow;
use crate::lookup::assignments::Assignment;
use crate::lookup::normalize::normalize;

/// Resolves the delivery-service value for an assignment. The id-based
/// lookup takes precedence; partner plus address-or-restaurant is the
/// fallback. Empty string when nothing resolves.
pub fn delivery_service(assignment: &Assignment, rows: &[DeliveryRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let assignment_id = assignment.id.trim();
    if !assignment_id.is_empty() {
        let by_id = rows
            .iter()
            .find(|row| row.id.trim() == assignment_id)
            .map(|row| row.service.trim());
        if let Some(service) = by_id
            && !service.is_empty()
        {
            return service.to_string();
        }
    }

    let partner = normalize(&assignment.partner);
    let restaurant = normalize(&assignment.restaurant);
    let address = normalize(&assignment.address);

    rows.iter()
        .find(|row| {
            normalize(&row.partner) == partner
                && (normalize(&row.address) == address || normalize(&row.restaurant) == restaurant)
        })
        .map(|row| row.service.trim().to_string())
        .unwrap_or_default()
}
