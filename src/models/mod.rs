pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod room;

pub use appointment::{Appointment, AppointmentInput};
pub use doctor::{Doctor, DoctorInput};
pub use patient::{Patient, PatientInput};
pub use room::Room;
