/// Carrier tariff lookup for the transport company admin page
///
/// Validates the admin form, calls the backend tariff endpoint and models the
/// tariff select field the results land in.

pub mod query;
pub mod client;
pub mod select;

pub use query::{company_id_from_path, TariffForm, TariffQuery, TariffSource, CDEK_API_TYPE};
pub use client::{Tariff, TariffClient, TARIFFS_PATH};
pub use select::{tariff_name_for_label, SelectOption, TariffSelect};

/// Run a lookup for an admin form and update its select field
///
/// Validation failures never reach the network and leave the field as it was.
pub fn load_into(
    client: &TariffClient,
    form: &TariffForm,
    select: &mut TariffSelect,
) -> Result<usize, crate::error::TariffError> {
    let query = form.to_query()?;

    select.begin_loading();
    let result = client.fetch(&query);
    select.apply(&result);

    result.map(|tariffs| tariffs.len())
}
