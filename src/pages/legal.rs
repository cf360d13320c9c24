//! Legal Pages
//!
//! Static privacy policy and terms of service content.

use leptos::*;

/// Which legal document to render
#[derive(Clone, Copy, PartialEq)]
pub enum LegalPage {
    Privacy,
    Terms,
}

/// Static legal content page
#[component]
pub fn Legal(page: LegalPage) -> impl IntoView {
    let (title, sections): (&str, &[(&str, &str)]) = match page {
        LegalPage::Privacy => (
            "Privacy Policy",
            &[
                (
                    "Data We Collect",
                    "We store the account details you provide (shop name, contact details, \
                     pickup address) and operational records generated by your shop: product \
                     listings, orders, shipment assignments and customer conversations.",
                ),
                (
                    "How We Use It",
                    "Your data is used to operate your storefront, route orders to couriers, \
                     and settle payouts. Aggregate, anonymised statistics may be used to \
                     improve marketplace search and promotions.",
                ),
                (
                    "Browser Storage",
                    "The portal keeps your login token in browser storage so you stay signed \
                     in, and caches dashboard figures for the duration of a tab session to \
                     speed up repeat visits. Clearing your browser storage removes both.",
                ),
                (
                    "Notifications",
                    "If you enable order alerts, a push subscription is registered with your \
                     browser. You can revoke it at any time from your browser's site settings.",
                ),
            ],
        ),
        LegalPage::Terms => (
            "Terms of Service",
            &[
                (
                    "Seller Obligations",
                    "You are responsible for the accuracy of your listings, for honouring \
                     confirmed orders, and for dispatching parcels within the committed \
                     handling time with a valid courier tracking number.",
                ),
                (
                    "Fees and Settlement",
                    "Marketplace commission is deducted per completed order. Outstanding \
                     platform dues must be cleared promptly; unpaid balances can suspend \
                     access to seller features until settled.",
                ),
                (
                    "Promotions",
                    "Joining a promotion applies its discount to your eligible listings for \
                     the campaign period. Leaving a live promotion takes effect within one \
                     business day.",
                ),
                (
                    "Termination",
                    "Repeated failure to fulfil orders, counterfeit listings, or abuse of \
                     customers may result in suspension or permanent removal from the \
                     marketplace.",
                ),
            ],
        ),
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold">{title}</h1>

            {sections.iter().map(|(heading, body)| view! {
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-lg font-semibold mb-2">{*heading}</h2>
                    <p class="text-gray-300 text-sm leading-relaxed">{*body}</p>
                </section>
            }).collect_view()}
        </div>
    }
}
