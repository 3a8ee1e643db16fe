//! Site routes and static page content.
//!
//! Four pages: Home (landing headline + gallery), About, Sources and
//! Telescope. Page text is static; only Home has live state (the gallery).

use serde::{Deserialize, Serialize};

/// One page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    About,
    Sources,
    Telescope,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Sources, Route::Telescope];

    pub fn index(self) -> usize {
        match self {
            Route::Home => 0,
            Route::About => 1,
            Route::Sources => 2,
            Route::Telescope => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Sources => "Sources",
            Route::Telescope => "Telescope",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Sources => "/sources",
            Route::Telescope => "/telescope",
        }
    }

    /// Accepts a path (`/about`) or a bare, case-insensitive name (`about`).
    pub fn from_path(s: &str) -> Option<Self> {
        let s = s.trim();
        let name = s.trim_start_matches('/').trim_end_matches('/');
        if name.is_empty() {
            return Some(Route::Home);
        }
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(name))
    }

    pub fn next(self) -> Route {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Route {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A titled block of prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

/// Links under one topic heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTopic {
    pub topic: &'static str,
    pub links: &'static [Link],
}

/// Links contributed by one project module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub module: &'static str,
    pub topics: &'static [LinkTopic],
}

pub const SITE_NAME: &str = "NebulaNet";

pub const LANDING_TITLE: &str = "JWST Feed";
pub const LANDING_TAGLINE: &str =
    "Check out the daily photo taken by the James Webb Space Telescope";

pub const ABOUT: &[Section] = &[
    Section {
        heading: "About NebulaNet",
        paragraphs: &[
            "This project presents the latest observations and discoveries captured by the \
             James Webb Space Telescope (JWST), sourced directly from the Mikulski Archive for \
             Space Telescopes (MAST) database. It is an interactive and educational portal for \
             exploring high definition visuals of galaxies, stars, planets and other celestial \
             phenomena. Each image is accompanied by detailed information: the scientific \
             context, the JWST instrument used to capture it, and other technical data.",
            "The site is meant to be both educational and engaging, so that users of all \
             backgrounds can view and learn about these discoveries.",
        ],
    },
    Section {
        heading: "FITS Processing Overview",
        paragraphs: &[
            "Observations are taken from MAST for JWST in the Flexible Image Transport System \
             (FITS) format, a common astronomy file format holding image data as 2D and 3D \
             arrays. The raw form of these images often masks the details needed for analysis, \
             and converting straight to PNG loses detail. Scaling is applied to the FITS data \
             before conversion to bring out features that are not apparent in the raw data.",
        ],
    },
    Section {
        heading: "Square Root Scaling",
        paragraphs: &[
            "Takes the square root of each pixel value. This compresses the dynamic range of \
             high intensities while expanding the range of low intensities, so dim features \
             stand out against the background.",
        ],
    },
    Section {
        heading: "Histogram Equalization Scaling",
        paragraphs: &[
            "Computes the histogram of pixel intensities, builds its cumulative distribution \
             function, and maps each pixel through it. The most frequent intensities are spread \
             out, raising contrast so features with close intensity values become distinct.",
        ],
    },
    Section {
        heading: "Application in FITS to PNG Conversion",
        paragraphs: &[
            "Applying these scaling methods before conversion keeps critical astronomical \
             features that would otherwise be lost, producing images that are both visually \
             clear and scientifically useful.",
        ],
    },
];

const AWS_GUIDES: LinkTopic = LinkTopic {
    topic: "Amazon Web Services",
    links: &[Link {
        label: "Open Guides GitHub",
        url: "https://github.com/open-guides/og-aws",
    }],
};

const AWS_STATIC_HOSTING: LinkTopic = LinkTopic {
    topic: "Static Hosting via AWS",
    links: &[
        Link {
            label: "AWS S3, Route 53, and CloudFront",
            url: "https://victoria.dev/blog/hosting-your-static-site-with-aws-s3-route-53-and-cloudfront/",
        },
        Link {
            label: "FreeCodeCamp - Static AWS Hosting",
            url: "https://www.freecodecamp.org/news/a-beginners-guide-on-how-to-host-a-static-site-with-aws/",
        },
    ],
};

pub const SOURCES: &[LinkGroup] = &[
    LinkGroup {
        module: "Photo and Metadata Coalescence Module",
        topics: &[
            LinkTopic {
                topic: "Accessing JWST data",
                links: &[Link {
                    label: "jwst-docs",
                    url: "https://jwst-docs.stsci.edu/",
                }],
            },
            LinkTopic {
                topic: "MAST queries using Astroquery",
                links: &[Link {
                    label: "astroquery docs",
                    url: "https://astroquery.readthedocs.io/en/latest/mast/mast.html",
                }],
            },
            LinkTopic {
                topic: "Interacting with the MAST API",
                links: &[Link {
                    label: "Astroquery Search and Retrieval",
                    url: "https://outerspace.stsci.edu/display/MASTDOCS/Using+MAST+APIs#UsingMASTAPIs-AstroquerySearchandRetrieval",
                }],
            },
            LinkTopic {
                topic: "FITS files and metadata extraction",
                links: &[
                    Link {
                        label: "CAOM field descriptions",
                        url: "https://mast.stsci.edu/api/v0/_c_a_o_mfields.html",
                    },
                    Link {
                        label: "astropy.io.fits",
                        url: "https://docs.astropy.org/en/stable/io/fits/index.html",
                    },
                ],
            },
            LinkTopic {
                topic: "Streaming FITS data into memory",
                links: &[Link {
                    label: "Python io",
                    url: "https://docs.python.org/3/library/io.html",
                }],
            },
            LinkTopic {
                topic: "Scaling FITS data",
                links: &[Link {
                    label: "Python FITS image",
                    url: "https://astromsshin.github.io/science/code/Python_fits_image/index.html",
                }],
            },
        ],
    },
    LinkGroup {
        module: "Web Hosting Module",
        topics: &[
            LinkTopic {
                topic: "AWS SDK Python library",
                links: &[Link {
                    label: "Amazon AWS Documentation",
                    url: "https://boto3.amazonaws.com/v1/documentation/api/latest/index.html",
                }],
            },
            AWS_GUIDES,
            AWS_STATIC_HOSTING,
        ],
    },
    LinkGroup {
        module: "Mission Information Gatherer Module",
        topics: &[LinkTopic {
            topic: "Observation Schedules",
            links: &[Link {
                label: "James Webb Observation Schedules",
                url: "https://www.stsci.edu/jwst/science-execution/observing-schedules",
            }],
        }],
    },
];

/// Asset path of the glTF telescope model served next to the site.
pub const TELESCOPE_MODEL: &str = "/3d-JSWT/scene.gltf";

pub const TELESCOPE: &[Section] = &[Section {
    heading: "The James Webb Space Telescope",
    paragraphs: &[
        "An interactive 3D model of the telescope lets visitors orbit and zoom to see what \
         JWST looks like. It is a static, purely educational model, loaded by the web viewer \
         from the asset below.",
    ],
}];

/// Credits shown at the end of every page.
pub const FOOTER_CREDITS: &[&str] = &[
    "This website was created for CS 422 during Winter 2024 at the University of Oregon.",
    "Made by Simon Zhao, Jacob Burke, Daniel Willard, Isabella Cortez, and Freddy Lopez.",
];
pub const FOOTER_MOTTO: &str = "Clearly the sky isn't the limit";
pub const FOOTER_RIGHTS: &str = "NebulaNet © 2024";

impl LinkGroup {
    pub fn link_count(&self) -> usize {
        self.topics.iter().map(|t| t.links.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_cycle() {
        assert_eq!(Route::Home.next(), Route::About);
        assert_eq!(Route::Telescope.next(), Route::Home);
        assert_eq!(Route::Home.prev(), Route::Telescope);
        assert_eq!(Route::About.prev(), Route::Home);
    }

    #[test]
    fn route_from_index() {
        for i in 0..4 {
            let r = Route::from_index(i).unwrap();
            assert_eq!(r.index(), i);
        }
        assert!(Route::from_index(4).is_none());
    }

    #[test]
    fn route_path_roundtrip() {
        for r in Route::ALL {
            assert_eq!(Route::from_path(r.path()), Some(r));
        }
        assert_eq!(Route::from_path("ABOUT"), Some(Route::About));
        assert_eq!(Route::from_path("/sources/"), Some(Route::Sources));
        assert_eq!(Route::from_path("/calendar"), None);
    }

    #[test]
    fn sources_links_are_absolute() {
        for group in SOURCES {
            assert!(group.link_count() > 0, "{} has no links", group.module);
            for topic in group.topics {
                for link in topic.links {
                    assert!(link.url.starts_with("https://"), "{}", link.url);
                }
            }
        }
    }

    #[test]
    fn about_has_scaling_sections() {
        let headings: Vec<&str> = ABOUT.iter().map(|s| s.heading).collect();
        assert!(headings.contains(&"Square Root Scaling"));
        assert!(headings.contains(&"Histogram Equalization Scaling"));
    }
}
