use crate::{
    database::{RecordStore, StoreResult},
    models::{
        donation::{Donation, NewDonation},
        volunteer::{NewVolunteer, Volunteer},
    },
    requests::{donation::DonationRequest, volunteer::VolunteerRequest},
    services::submission::{Notice, SubmissionForm},
};
use async_trait::async_trait;

const SOMETHING_WENT_WRONG: &str = "Something went wrong";

pub struct DonationForm;

#[async_trait]
impl SubmissionForm for DonationForm {
    type Input = DonationRequest;
    type Record = NewDonation;
    type Stored = Donation;

    const NAME: &'static str = "donation";
    const HOLDS_CONFIRMATION: bool = true;
    const CONFIRMATION: Notice = Notice {
        title: "Thank you for your donation!",
        description: "Your generosity helps us make a difference in the lives of physically challenged children.",
    };
    const FAILURE: Notice = Notice {
        title: SOMETHING_WENT_WRONG,
        description: "Your donation couldn't be processed. Please try again later.",
    };

    async fn persist(store: &dyn RecordStore, record: NewDonation) -> StoreResult<Donation> {
        store.insert_donation(record).await
    }
}

pub struct VolunteerForm;

#[async_trait]
impl SubmissionForm for VolunteerForm {
    type Input = VolunteerRequest;
    type Record = NewVolunteer;
    type Stored = Volunteer;

    const NAME: &'static str = "volunteer";
    const HOLDS_CONFIRMATION: bool = false;
    const CONFIRMATION: Notice = Notice {
        title: "Application Submitted",
        description: "Thank you for your interest in volunteering with us. We'll be in touch soon!",
    };
    const FAILURE: Notice = Notice {
        title: SOMETHING_WENT_WRONG,
        description: "Your application couldn't be submitted. Please try again later.",
    };

    async fn persist(store: &dyn RecordStore, record: NewVolunteer) -> StoreResult<Volunteer> {
        store.insert_volunteer(record).await
    }
}
