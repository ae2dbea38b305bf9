//! Compiled-in sample accounts and emails
//!
//! Stands in for a real mail backend. The set is fixed: one user account,
//! ten contacts, and twelve emails spread over the four mailboxes.

use crate::models::{Account, AccountId, Email, EmailId, MailboxType};

use super::MailDataSource;

/// The built-in demonstration data set
///
/// Construction is deterministic; two instances always hold identical data.
pub struct DemoMailData {
    user: Account,
    contacts: Vec<Account>,
    emails: Vec<Email>,
}

impl DemoMailData {
    pub fn new() -> Self {
        let user = Account::new(1, "Juno", "Park", "juno.park@lyramail.app", "avatar_1");

        let ines = Account::new(4, "Ines", "Moreau", "ines.moreau@vintagecafe.fr", "avatar_1");
        let petra = Account::new(5, "Petra", "Lang", "petra.lang@langdesign.de", "avatar_3");
        let marcus = Account::new(6, "Marcus", "Webb", "marcus.webb@webbandco.com", "avatar_5");
        let amara = Account::new(7, "Amara", "Okafor", "amara.okafor@brightlabs.io", "avatar_0");
        let theo = Account::new(8, "Theo", "Jansen", "theo.jansen@jansenphoto.nl", "avatar_7");
        let sofia = Account::new(9, "Sofia", "Reyes", "sofia.reyes@reyesarch.com", "avatar_9");
        let dmitri = Account::new(10, "Dmitri", "Volkov", "dmitri.volkov@volkovmusic.com", "avatar_2");
        let hana = Account::new(11, "Hana", "Kim", "hana.kim@kimstudio.kr", "avatar_8");
        let lucas = Account::new(12, "Lucas", "Ferraro", "deals@ferrarobikes.it", "avatar_6");
        let maeve = Account::new(13, "Maeve", "O'Brien", "maeve.obrien@obrienbooks.ie", "avatar_4");

        let emails = vec![
            Email::builder(0, sofia.clone())
                .recipient(user.clone())
                .subject("Site plans are ready")
                .body(
                    "The revised drawings for the studio extension are attached. \
                     The skylight moved to the north face like we discussed, which \
                     buys you another meter of wall space. Let me know if the budget \
                     still works before I send them to the contractor.",
                )
                .created_at("20 mins ago")
                .build(),
            Email::builder(1, marcus.clone())
                .recipient(user.clone())
                .subject("Quarterly budget review")
                .body(
                    "Finance wants the department numbers by Thursday. Most line \
                     items carry over, but travel needs a fresh estimate. Can you \
                     fill in your sheet before the sync tomorrow?",
                )
                .created_at("40 mins ago")
                .build(),
            Email::builder(2, petra.clone())
                .recipient(user.clone())
                .subject("Logo concepts, round two")
                .body(
                    "Second round attached. I kept the wordmark from option B and \
                     tried three new icon treatments. The monochrome one holds up \
                     best at small sizes. Tell me which direction to refine.",
                )
                .created_at("1 hour ago")
                .build(),
            Email::builder(3, user.clone())
                .recipient(theo.clone())
                .subject("Re: Gallery prints")
                .body(
                    "The A2 size works for all six photos. Matte paper, no borders. \
                     I'll pick them up Friday afternoon if they're ready by then.",
                )
                .mailbox(MailboxType::Sent)
                .created_at("2 hours ago")
                .build(),
            Email::builder(4, hana.clone())
                .subject("Open studio night")
                .body(
                    "We're opening the studio next Saturday from six. New ceramics, \
                     some prints, and the kiln will be running. Bring anyone who \
                     likes clay and cheap wine.",
                )
                .created_at("3 hours ago")
                .build(),
            Email::builder(5, maeve.clone())
                .recipient(user.clone())
                .subject("Book club picks")
                .body(
                    "Votes are in: we're reading the Shirley Jackson first, then the \
                     translation Priya suggested. First meeting is at my place on \
                     the 12th. I'll have copies of both if you haven't ordered.",
                )
                .created_at("4 hours ago")
                .build(),
            Email::builder(6, user.clone())
                .recipient(dmitri.clone())
                .subject("Practice schedule")
                .body(
                    "Tuesdays are out for me now. Could we move rehearsal to \
                     Wednesday evenings? Same room works, I already checked with \
                     the studio.",
                )
                .mailbox(MailboxType::Sent)
                .created_at("5 hours ago")
                .build(),
            Email::builder(7, sofia.clone())
                .recipient(user.clone())
                .subject("Dinner on Saturday?")
                .body(
                    "We're trying the new Georgian place on Harbor Street. Table at \
                     eight, currently four of us. Say the word and I'll make it five.",
                )
                .created_at("6 hours ago")
                .build(),
            Email::builder(8, maeve.clone())
                .recipient(user.clone())
                .subject("Signed copies arrived")
                .body(
                    "The box from the publisher finally showed up, and your copy is \
                     in it. I'll hold it behind the counter. Careful, the ink \
                     smudges if you open it too eagerly.",
                )
                .created_at("7 hours ago")
                .build(),
            Email::builder(9, user.clone())
                .recipient(dmitri.clone())
                .subject("Set list ideas")
                .body(
                    "Opening with the slow one is a risk, but if we follow it with \
                     the two uptempo tracks the room should come back. Still unsure \
                     about the encore, maybe",
                )
                .mailbox(MailboxType::Drafts)
                .created_at("Yesterday")
                .build(),
            Email::builder(10, petra.clone())
                .recipient(user.clone())
                .subject("Invoice #2041")
                .body(
                    "Invoice for the March design work is attached. Same terms as \
                     last time, thirty days. Shout if anything looks off.",
                )
                .created_at("Yesterday")
                .build(),
            Email::builder(11, lucas.clone())
                .recipient(user.clone())
                .subject("You've WON a free e-bike!!!")
                .body(
                    "Congratulations! You have been selected from thousands of \
                     riders to receive a FREE e-bike. Click the link below within \
                     24 hours to claim your prize. No purchase necessary!",
                )
                .mailbox(MailboxType::Spam)
                .created_at("2 days ago")
                .build(),
        ];

        let contacts = vec![
            ines, petra, marcus, amara, theo, sofia, dmitri, hana, lucas, maeve,
        ];

        Self {
            user,
            contacts,
            emails,
        }
    }
}

impl Default for DemoMailData {
    fn default() -> Self {
        Self::new()
    }
}

impl MailDataSource for DemoMailData {
    fn user_account(&self) -> Account {
        self.user.clone()
    }

    fn accounts(&self) -> Vec<Account> {
        self.contacts.clone()
    }

    fn account_by_id(&self, id: AccountId) -> Option<Account> {
        self.contacts.iter().find(|a| a.id == id).cloned()
    }

    fn emails(&self) -> Vec<Email> {
        self.emails.clone()
    }

    fn email_by_id(&self, id: EmailId) -> Option<Email> {
        self.emails.iter().find(|e| e.id == id).cloned()
    }
}
