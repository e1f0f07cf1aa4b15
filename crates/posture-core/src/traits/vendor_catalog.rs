use crate::models::CellAddress;

/// Static, read-only lookup from grid cell to an ordered vendor list.
pub trait IVendorCatalog {
    /// Vendors for a cell in catalog order. Unknown cells return an empty slice.
    fn vendors(&self, cell: CellAddress) -> &[String];
}
