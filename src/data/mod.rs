pub mod connectors;

pub use connectors::{
    load_tickets, LoadReport, TicketCsvConnector, TicketExcelConnector, TicketValidator,
};
