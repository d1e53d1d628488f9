use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::employee::{Attachment, Employee};

use super::EditorMode;

/// Employee editor form: identity and address are required, the
/// professional profile is free-form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EmployeeForm {
    #[validate(length(min = 1, message = "First Name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last Name is required"))]
    pub last_name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile: String,
    pub secondary_mobile: Option<String>,
    pub door_no: Option<String>,
    pub street: Option<String>,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    pub district: Option<String>,
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
    pub work_location: Option<String>,
    pub sales_type: Option<String>,
    pub availability: Option<String>,
    pub experience: Option<String>,
    pub skills: Option<Vec<String>>,
    pub portfolio: Option<String>,
    pub reason: Option<String>,
    pub profile_image: Option<Attachment>,
    pub id_document: Option<Attachment>,
    #[serde(skip)]
    pub initial: Option<Employee>,
}

impl EmployeeForm {
    pub fn mode(&self) -> EditorMode {
        if self.initial.is_some() {
            EditorMode::Update
        } else {
            EditorMode::Create
        }
    }

    pub fn from_employee(employee: Employee) -> Self {
        EmployeeForm {
            first_name: employee.firstName.clone(),
            last_name: employee.lastName.clone(),
            email: employee.email.clone(),
            mobile: employee.mobile.clone(),
            secondary_mobile: employee.secondaryMobile.clone(),
            door_no: employee.doorNo.clone(),
            street: employee.street.clone(),
            city: employee.city.clone(),
            district: employee.district.clone(),
            state: employee.state.clone(),
            country: employee.country.clone(),
            work_location: employee.workLocation.clone(),
            sales_type: employee.salesType.clone(),
            availability: employee.availability.clone(),
            experience: employee.experience.clone(),
            skills: employee.skills.clone(),
            portfolio: employee.portfolio.clone(),
            reason: employee.reason.clone(),
            profile_image: employee.profileImage.clone(),
            id_document: employee.idDocument.clone(),
            initial: Some(employee),
        }
    }

    pub fn to_employee(&self, created_by: Option<String>) -> Employee {
        let initial = self.initial.as_ref();
        Employee {
            id: initial.and_then(|e| e.id),
            firstName: self.first_name.clone(),
            lastName: self.last_name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            secondaryMobile: self.secondary_mobile.clone(),
            doorNo: self.door_no.clone(),
            street: self.street.clone(),
            city: self.city.clone(),
            district: self.district.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            workLocation: self.work_location.clone(),
            salesType: self.sales_type.clone(),
            availability: self.availability.clone(),
            experience: self.experience.clone(),
            skills: self.skills.clone(),
            portfolio: self.portfolio.clone(),
            reason: self.reason.clone(),
            profileImage: self.profile_image.clone(),
            idDocument: self.id_document.clone(),
            createdAt: initial.and_then(|e| e.createdAt.clone()),
            createdBy: initial
                .and_then(|e| e.createdBy.clone())
                .or(created_by),
            updatedAt: None,
            updatedBy: None,
            isActive: initial.map(|e| e.isActive).unwrap_or(true),
            isDelete: initial.map(|e| e.isDelete).unwrap_or(false),
        }
    }

    pub fn clear(&mut self) {
        *self = EmployeeForm::default();
    }
}
