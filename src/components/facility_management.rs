/// Turf catalogue management: submit, edit in place, delete.
use leptos::*;

use crate::components::editable_cell::EditableCell;
use crate::components::facility_form::FacilityForm;
use crate::models::facility::{Facility, FacilityId, FacilityPatch, FacilityStatus};
use crate::state::AppState;
use crate::utils::reactive::signal_from_stream;

// A verdict rebuilds the row.
fn row_key(facility: &Facility) -> (FacilityId, FacilityStatus) {
    (facility.id, facility.status)
}

#[component]
pub fn FacilityManagement() -> impl IntoView {
    let state = expect_context::<AppState>();
    let facilities = signal_from_stream(state.facilities.snapshot(), state.facilities.list());
    let store = state.facilities.clone();

    view! {
        <section>
            <h2>{ "Manage Turfs" }</h2>
            <FacilityForm />
            <table>
                <thead>
                    <tr>
                        <th>{ "Name" }</th>
                        <th>{ "Location" }</th>
                        <th>{ "Price" }</th>
                        <th>{ "Status" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || facilities.get()
                        key=row_key
                        children=move |facility| {
                            let id = facility.id;
                            let rename = store.clone();
                            let relocate = store.clone();
                            let reprice = store.clone();
                            let remove = store.clone();
                            view! {
                                <tr>
                                    <td>
                                        <EditableCell
                                            value=facility.name.clone()
                                            on_commit=move |name| rename.update(FacilityPatch::new(id).name(name))
                                        />
                                    </td>
                                    <td>
                                        <EditableCell
                                            value=facility.location.clone()
                                            on_commit=move |location| relocate.update(FacilityPatch::new(id).location(location))
                                        />
                                    </td>
                                    <td>
                                        <EditableCell
                                            value=format!("{}", facility.price)
                                            on_commit=move |raw: String| {
                                                let price = raw.trim().parse::<f64>().ok().filter(|p| p.is_finite() && *p > 0.0);
                                                if let Some(price) = price {
                                                    reprice.update(FacilityPatch::new(id).price(price));
                                                }
                                            }
                                        />
                                    </td>
                                    <td>{ facility.status.to_string() }</td>
                                    <td>
                                        <button on:click=move |_| remove.delete(id)>{ "Delete" }</button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::facility::Verdict;
    use crate::stores::FacilityStore;

    #[test]
    fn verdicts_change_the_row_key() {
        let store = FacilityStore::seeded();
        let before = store.get_by_id(3).unwrap();

        store.set_status(3, Verdict::Approved);
        let after = store.get_by_id(3).unwrap();

        assert_eq!(row_key(&before), (3, FacilityStatus::Pending));
        assert_ne!(row_key(&before), row_key(&after));
    }
}
